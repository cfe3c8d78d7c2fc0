/// Ordered list of bookable time labels.
///
/// Slots carry no availability rules: every configured label can be picked on
/// every date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlots {
    labels: Vec<String>,
}

impl TimeSlots {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
