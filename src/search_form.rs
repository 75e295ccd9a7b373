use serde::Deserialize;

/// The `subject[]` value of one search.
///
/// The subject list artifact holds either plain codes or lists of codes, so
/// both shapes deserialize straight from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SubjectFilter {
    Single(String),
    Many(Vec<String>),
}

impl SubjectFilter {
    /// An empty subject, which the catalog treats as "every subject".
    pub fn all_subjects() -> Self {
        SubjectFilter::Single(String::new())
    }

    pub fn codes(&self) -> Vec<&str> {
        match self {
            SubjectFilter::Single(code) => vec![code.as_str()],
            SubjectFilter::Many(codes) => codes.iter().map(String::as_str).collect(),
        }
    }
}

impl std::fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectFilter::Single(code) if code.is_empty() => write!(f, "<all subjects>"),
            SubjectFilter::Single(code) => write!(f, "{code}"),
            SubjectFilter::Many(codes) => write!(f, "[{}]", codes.join(", ")),
        }
    }
}

// Sent empty on every search, but the site expects them in the form body.
const BLANK_FIELDS: [&str; 8] = [
    "courseNumber",
    "openWaitlist",
    "crnNumber",
    "level",
    "courseTitle",
    "instructor",
    "instructorUid",
    "creditHours",
];

#[derive(Debug, Clone)]
pub struct SearchForm<'a> {
    pub token: &'a str,
    pub term: &'a str,
    pub campus_filters: &'a [String],
    pub subject: &'a SubjectFilter,
}

impl<'a> SearchForm<'a> {
    /// Field list in submission order, array fields repeated once per value.
    pub fn to_fields(&self) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![("_token", self.token), ("term", self.term)];
        fields.extend(
            self.campus_filters
                .iter()
                .map(|campus| ("campusFilter[]", campus.as_str())),
        );
        fields.extend(self.subject.codes().into_iter().map(|code| ("subject[]", code)));
        fields.extend(BLANK_FIELDS.iter().map(|name| (*name, "")));
        fields.push(("startEndTime[]", ""));
        fields.push(("startEndTime[]", ""));
        fields.push(("courseSearch", ""));
        fields
    }
}
