//! Form field value objects

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Input kind, drives validation and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number,
    Multiline,
    Select(Vec<SelectOption>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// Static description of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub requirement: Requirement,
}

impl FieldSpec {
    pub fn new(id: &str, label: &str, kind: FieldKind, requirement: Requirement) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            requirement,
        }
    }

    pub fn required(id: &str, label: &str, kind: FieldKind) -> Self {
        Self::new(id, label, kind, Requirement::Required)
    }

    pub fn optional(id: &str, label: &str, kind: FieldKind) -> Self {
        Self::new(id, label, kind, Requirement::Optional)
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }
}

/// Current input of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the select options
    Choice(Option<usize>),
}

/// A field with its spec, current value and error marker
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: FieldValue,
    pub invalid: bool,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        let value = match spec.kind {
            FieldKind::Select(_) => FieldValue::Choice(None),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            spec,
            value,
            invalid: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    fn options(&self) -> &[SelectOption] {
        match &self.spec.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Get the text value (returns empty string for select fields)
    #[cfg(test)]
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        match self.value {
            FieldValue::Choice(Some(i)) => self.options().get(i),
            _ => None,
        }
    }

    /// Value submitted for this field; selects submit the option label
    pub fn submitted_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(_) => self
                .selected()
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.to_string();
        }
    }

    /// Select the option whose value matches
    #[cfg(test)]
    pub fn select_value(&mut self, value: &str) -> bool {
        let position = self.options().iter().position(|o| o.value == value);
        if let (FieldValue::Choice(choice), Some(i)) = (&mut self.value, position) {
            *choice = Some(i);
            return true;
        }
        false
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match (&self.spec.kind, &mut self.value) {
            (FieldKind::Number, FieldValue::Text(s)) => {
                if c.is_ascii_digit() || c == '.' {
                    s.push(c);
                }
            }
            (_, FieldValue::Text(s)) => s.push(c),
            // Selects change with select_next/select_prev
            (_, FieldValue::Choice(_)) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    pub fn select_next(&mut self) {
        let count = self.options().len();
        if let FieldValue::Choice(choice) = &mut self.value {
            if count > 0 {
                *choice = Some(choice.map_or(0, |i| (i + 1) % count));
            }
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.options().len();
        if let FieldValue::Choice(choice) = &mut self.value {
            if count > 0 {
                *choice = Some(choice.map_or(count - 1, |i| (i + count - 1) % count));
            }
        }
    }

    /// Reset the value and the error marker
    pub fn clear(&mut self) {
        self.value = match self.value {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Choice(_) => FieldValue::Choice(None),
        };
        self.invalid = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(_) => match self.selected() {
                Some(option) => format!("◂ {} ▸", option.label),
                None => "◂ Select ▸".to_string(),
            },
        }
    }
}
