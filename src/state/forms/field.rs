//! Contact form field value objects

/// How a field is edited and which validation rules apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
    Choice,
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice(usize),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
    /// (wire value, display label) pairs; empty for non-choice fields
    pub options: &'static [(&'static str, &'static str)],
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required,
            value: FieldValue::Text(String::new()),
            options: &[],
        }
    }

    /// Create a new email field
    pub fn email(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(name, label, required)
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            kind: FieldKind::Multiline,
            ..Self::text(name, label, required)
        }
    }

    /// Create a new choice field; the first option is preselected
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice,
            required: true,
            value: FieldValue::Choice(0),
            options,
        }
    }

    /// Get the current value as it would go over the wire
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(i) => self.options.get(*i).map_or("", |(value, _)| *value),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            // Choice fields are cycled, not typed into
            FieldValue::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(_) => {}
        }
    }

    /// Clear the field back to its initial value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(i) => *i = 0,
        }
    }

    /// Select the next option (choice fields only, wraps around)
    pub fn next_option(&mut self) {
        let len = self.options.len();
        if let FieldValue::Choice(i) = &mut self.value {
            if len > 0 {
                *i = (*i + 1) % len;
            }
        }
    }

    /// Select the previous option (choice fields only, wraps around)
    pub fn prev_option(&mut self) {
        let len = self.options.len();
        if let FieldValue::Choice(i) = &mut self.value {
            if len > 0 {
                *i = i.checked_sub(1).unwrap_or(len - 1);
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(i) => self
                .options
                .get(*i)
                .map_or(String::new(), |(_, label)| (*label).to_string()),
        }
    }
}
