use std::collections::BTreeMap;
use std::fmt;

/// One screen of the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Details = 1,
    Plan = 2,
    Contact = 3,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Details, Step::Plan, Step::Contact];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Details => Some(Step::Plan),
            Step::Plan => Some(Step::Contact),
            Step::Contact => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Details => None,
            Step::Plan => Some(Step::Details),
            Step::Contact => Some(Step::Plan),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Details => "Event details",
            Step::Plan => "Choose your plan",
            Step::Contact => "Your details",
        }
    }

    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| f.step() == self)
    }
}

pub const EVENT_TYPES: &[&str] = &[
    "Wedding",
    "Corporate Event",
    "Birthday Party",
    "School or Fete",
    "Festival",
    "Other",
];

pub const DURATIONS: &[&str] = &["1 hour", "2 hours", "3 hours", "4+ hours"];

pub const PRICING_PLANS: &[&str] = &["Pay Per Scoop", "Pre-Paid Bundle", "Unlimited Package"];

pub const ATTENDANCE: &[&str] = &["Under 50", "50-100", "100-200", "200+"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    Time,
    Email,
    Tel,
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// The `type` attribute used when rendered as an `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
        }
    }
}

/// Every value the booking form collects. The declaration order is the
/// order fields are rendered, validated and submitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    OrgName,
    EventType,
    Date,
    Time,
    Duration,
    Address,
    Postcode,
    PricingPlan,
    Attendance,
    Dietary,
    ContactName,
    Phone,
    Email,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::OrgName,
        Field::EventType,
        Field::Date,
        Field::Time,
        Field::Duration,
        Field::Address,
        Field::Postcode,
        Field::PricingPlan,
        Field::Attendance,
        Field::Dietary,
        Field::ContactName,
        Field::Phone,
        Field::Email,
    ];

    /// Name the intake service receives the value under.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::OrgName => "Org_Name",
            Field::EventType => "Event_Type",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Duration => "Duration",
            Field::Address => "Address",
            Field::Postcode => "Postcode",
            Field::PricingPlan => "Pricing_Plan",
            Field::Attendance => "Attendance",
            Field::Dietary => "Dietary",
            Field::ContactName => "Contact_Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::OrgName => "Organisation name",
            Field::EventType => "Type of event",
            Field::Date => "Event date",
            Field::Time => "Start time",
            Field::Duration => "How long should we stay?",
            Field::Address => "Event address",
            Field::Postcode => "Postcode",
            Field::PricingPlan => "Pricing plan",
            Field::Attendance => "Expected guests",
            Field::Dietary => "Dietary requirements",
            Field::ContactName => "Your name",
            Field::Phone => "Phone number",
            Field::Email => "Email address",
        }
    }

    pub fn step(self) -> Step {
        match self {
            Field::OrgName
            | Field::EventType
            | Field::Date
            | Field::Time
            | Field::Duration
            | Field::Address
            | Field::Postcode => Step::Details,
            Field::PricingPlan | Field::Attendance | Field::Dietary => Step::Plan,
            Field::ContactName | Field::Phone | Field::Email => Step::Contact,
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::OrgName | Field::Dietary)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::EventType => FieldKind::Select(EVENT_TYPES),
            Field::Duration => FieldKind::Select(DURATIONS),
            Field::PricingPlan => FieldKind::Select(PRICING_PLANS),
            Field::Attendance => FieldKind::Select(ATTENDANCE),
            Field::Date => FieldKind::Date,
            Field::Time => FieldKind::Time,
            Field::Email => FieldKind::Email,
            Field::Phone => FieldKind::Tel,
            Field::Dietary => FieldKind::TextArea,
            Field::OrgName | Field::Address | Field::Postcode | Field::ContactName => FieldKind::Text,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::OrgName => "e.g. Riverside Primary PTA",
            Field::Address => "Venue name and street",
            Field::Postcode => "e.g. BS1 4DJ",
            Field::Dietary => "Vegan, nut-free, dairy-free...",
            Field::ContactName => "First and last name",
            Field::Phone => "07700 900123",
            Field::Email => "you@example.com",
            _ => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient values typed into the form, keyed by the closed field schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn payload(&self) -> IntakePayload {
        IntakePayload(
            Field::ALL
                .into_iter()
                .map(|f| (f.wire_name(), self.get(f).trim().to_string()))
                .collect(),
        )
    }
}

/// Serialized lead, in field declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct IntakePayload(pub Vec<(&'static str, String)>);

impl IntakePayload {
    #[cfg(test)]
    pub fn get(&self, wire_name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == wire_name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Matches a `?plan=` query value against the known plans, ignoring case
/// and treating `-`/`_` as spaces so `/book?plan=pre-paid-bundle` works.
pub fn plan_from_query(raw: &str) -> Option<&'static str> {
    let wanted = raw.replace(['-', '_', '+'], " ").to_lowercase();
    PRICING_PLANS
        .iter()
        .copied()
        .find(|plan| plan.replace('-', " ").to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_owns_at_least_one_required_field() {
        for step in Step::ALL {
            assert!(step.fields().any(Field::required), "{step:?}");
        }
    }

    #[test]
    fn payload_covers_every_field_in_order() {
        let mut values = FieldValues::default();
        values.set(Field::Email, " jo@example.com ");
        let payload = values.payload();
        let names: Vec<_> = payload.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "Org_Name",
                "Event_Type",
                "Date",
                "Time",
                "Duration",
                "Address",
                "Postcode",
                "Pricing_Plan",
                "Attendance",
                "Dietary",
                "Contact_Name",
                "Phone",
                "Email",
            ]
        );
        assert_eq!(payload.get("Email"), Some("jo@example.com"));
        assert_eq!(payload.get("Org_Name"), Some(""));
    }

    #[test]
    fn plan_query_matches_loosely() {
        assert_eq!(plan_from_query("pre-paid-bundle"), Some("Pre-Paid Bundle"));
        assert_eq!(plan_from_query("Unlimited+Package"), Some("Unlimited Package"));
        assert_eq!(plan_from_query("gold"), None);
    }

    #[test]
    fn step_navigation_never_skips() {
        assert_eq!(Step::Details.next(), Some(Step::Plan));
        assert_eq!(Step::Contact.next(), None);
        assert_eq!(Step::Details.previous(), None);
        assert_eq!(Step::Contact.previous().map(Step::number), Some(2));
    }
}
