// Form intake endpoint. Debug builds post to a local mock so test leads never
// reach the real inbox.
#[cfg(debug_assertions)]
pub fn intake_endpoint() -> &'static str {
    "http://localhost:3001/intake"
}

#[cfg(not(debug_assertions))]
pub fn intake_endpoint() -> &'static str {
    match option_env!("INTAKE_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/scoopandroll",
    }
}

pub const SITE_NAME: &str = "Scoop & Roll";
pub const SITE_URL: &str = "https://scoopandroll.co.uk";
pub const CONTACT_PHONE: &str = "+44 7700 900123";
pub const CONTACT_EMAIL: &str = "hello@scoopandroll.co.uk";
