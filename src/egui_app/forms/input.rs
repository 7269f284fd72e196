//! Form input primitives
//!
//! An [`InputField`] is the state behind one text box: its value, how it is
//! displayed, and the rules it is checked against. Rendering lives in
//! `views::inputs`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

/// Client-side rules checked by [`InputField::validate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub value: String,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub hint: Option<String>,
    pub error: Option<String>,
    pub success: bool,
    pub disabled: bool,
    pub rules: FieldRules,
    revealed: bool,
}

impl InputField {
    pub fn new(kind: InputKind, placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            kind,
            placeholder,
            hint: None,
            error: None,
            success: false,
            disabled: false,
            rules: FieldRules::default(),
            revealed: false,
        }
    }

    pub fn text(placeholder: &'static str) -> Self {
        Self::new(InputKind::Text, placeholder)
    }

    pub fn email(placeholder: &'static str) -> Self {
        Self::new(InputKind::Email, placeholder)
    }

    pub fn password(placeholder: &'static str) -> Self {
        Self::new(InputKind::Password, placeholder)
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Whether the widget should hide the characters typed
    pub fn masks_input(&self) -> bool {
        self.kind == InputKind::Password && !self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip password visibility. Has no effect on the value or validation.
    pub fn toggle_visibility(&mut self) {
        if self.kind == InputKind::Password {
            self.revealed = !self.revealed;
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// First rule `value` breaks, phrased for `label`
    pub fn validate(&self, label: &str) -> Option<String> {
        let len = self.value.chars().count();
        if self.rules.required && self.is_blank() {
            return Some(format!("{} is required", label));
        }
        if len == 0 {
            return None;
        }
        if let Some(min) = self.rules.min_length {
            if len < min {
                return Some(format!("{} must be at least {} characters", label, min));
            }
        }
        if let Some(max) = self.rules.max_length {
            if len > max {
                return Some(format!("{} must be at most {} characters", label, max));
            }
        }
        if self.kind == InputKind::Email && !looks_like_email(&self.value) {
            return Some("Enter a valid email address".to_string());
        }
        None
    }

    /// Run `validate` and store the result on the field
    pub fn check(&mut self, label: &str) -> Option<String> {
        self.error = self.validate(label);
        self.error.clone()
    }

    /// Back to a blank, hidden, error-free field
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
        self.success = false;
        self.revealed = false;
    }
}

/// Loose shape check: something before an `@`, a dot somewhere after it
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// `abcdef@example.com` becomes `abc...@example.com`
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };
    let prefix: String = local.chars().take(3).collect();
    match domain {
        Some(domain) => format!("{}...@{}", prefix, domain),
        None => format!("{}...", prefix),
    }
}
