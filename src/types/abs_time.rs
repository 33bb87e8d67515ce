use chrono::NaiveDateTime;

/// Absolute start time of a trace, taken from the optional `date` header line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsoluteTime {
    /// The header text after the leading `date` keyword.
    pub text: String,

    /// Parsed value, `None` when no valid header was found.
    pub value: Option<NaiveDateTime>,
}

impl AbsoluteTime {
    /// Resets all fields to their default values.
    pub fn clear(&mut self) {
        self.text.clear();
        self.value = None;
    }
}
