//! Prediction form schema and the numeric input guard

/// Declared range of a numeric field. Either side may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Leading integer of `text`: optional sign then digits. "12.5" -> 12, "abc" -> None.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long inputs so they still clamp to a bound
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Replace `value` with the nearest bound when it parses outside `bounds`.
/// Returns true if the value was rewritten.
pub fn clamp_to_bounds(value: &mut String, bounds: Bounds) -> bool {
    let Some(parsed) = parse_leading_int(value) else {
        return false;
    };
    let clamped = match (bounds.min, bounds.max) {
        (Some(min), _) if parsed < min => min,
        (_, Some(max)) if parsed > max => max,
        _ => return false,
    };
    *value = clamped.to_string();
    true
}

// ============================================================================
// FORM SCHEMA
// ============================================================================

pub enum FieldKind {
    /// Free numeric entry; `decimal` allows a fractional part
    Number { bounds: Bounds, decimal: bool },
    /// Coded choice: (value sent to the server, label shown)
    Choice(&'static [(&'static str, &'static str)]),
}

pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const BINARY: &[(&str, &str)] = &[("0", "No"), ("1", "Yes")];

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "age",
        label: "Age",
        kind: FieldKind::Number { bounds: Bounds::new(1, 120), decimal: false },
    },
    FieldSpec {
        name: "sex",
        label: "Sex",
        kind: FieldKind::Choice(&[("0", "Female"), ("1", "Male")]),
    },
    FieldSpec {
        name: "cp",
        label: "Chest Pain Type",
        kind: FieldKind::Choice(&[
            ("0", "Typical Angina"),
            ("1", "Atypical Angina"),
            ("2", "Non-anginal Pain"),
            ("3", "Asymptomatic"),
        ]),
    },
    FieldSpec {
        name: "trestbps",
        label: "Resting Blood Pressure (mm Hg)",
        kind: FieldKind::Number { bounds: Bounds::new(80, 200), decimal: false },
    },
    FieldSpec {
        name: "chol",
        label: "Serum Cholesterol (mg/dl)",
        kind: FieldKind::Number { bounds: Bounds::new(100, 600), decimal: false },
    },
    FieldSpec {
        name: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        kind: FieldKind::Choice(BINARY),
    },
    FieldSpec {
        name: "restecg",
        label: "Resting ECG",
        kind: FieldKind::Choice(&[
            ("0", "Normal"),
            ("1", "ST-T Wave Abnormality"),
            ("2", "Left Ventricular Hypertrophy"),
        ]),
    },
    FieldSpec {
        name: "thalach",
        label: "Max Heart Rate Achieved",
        kind: FieldKind::Number { bounds: Bounds::new(60, 220), decimal: false },
    },
    FieldSpec {
        name: "exang",
        label: "Exercise Induced Angina",
        kind: FieldKind::Choice(BINARY),
    },
    FieldSpec {
        name: "oldpeak",
        label: "ST Depression (oldpeak)",
        kind: FieldKind::Number { bounds: Bounds::new(0, 10), decimal: true },
    },
    FieldSpec {
        name: "slope",
        label: "Slope of Peak ST Segment",
        kind: FieldKind::Choice(&[("0", "Upsloping"), ("1", "Flat"), ("2", "Downsloping")]),
    },
    FieldSpec {
        name: "ca",
        label: "Major Vessels Colored (0-3)",
        kind: FieldKind::Number { bounds: Bounds::new(0, 3), decimal: false },
    },
    FieldSpec {
        name: "thal",
        label: "Thalassemia",
        kind: FieldKind::Choice(&[
            ("0", "Normal"),
            ("1", "Fixed Defect"),
            ("2", "Reversible Defect"),
            ("3", "Unknown"),
        ]),
    },
];

fn initial_value(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Number { .. } => String::new(),
        FieldKind::Choice(options) => options
            .first()
            .map(|(value, _)| value.to_string())
            .unwrap_or_default(),
    }
}

/// Current values of the prediction form, index-aligned with `FIELDS`
pub struct PredictForm {
    values: Vec<String>,
}

impl Default for PredictForm {
    fn default() -> Self {
        Self {
            values: FIELDS.iter().map(initial_value).collect(),
        }
    }
}

impl PredictForm {
    pub fn value(&self, idx: usize) -> &str {
        self.values.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut String> {
        self.values.get_mut(idx)
    }

    /// Apply the input guard after an edit of field `idx`. Returns true if the value was clamped.
    pub fn guard(&mut self, idx: usize) -> bool {
        match (self.values.get_mut(idx), FIELDS.get(idx).map(|f| &f.kind)) {
            (Some(slot), Some(FieldKind::Number { bounds, .. })) => clamp_to_bounds(slot, *bounds),
            _ => false,
        }
    }

    /// Reset every field to its initial value
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Name/value pairs in schema order, ready for urlencoding
    pub fn encode(&self) -> Vec<(String, String)> {
        FIELDS
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| (spec.name.to_string(), value.trim().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_index(name: &str) -> usize {
        FIELDS.iter().position(|f| f.name == name).unwrap()
    }

    /// Simulates typing `value` into field `idx`
    fn edit(form: &mut PredictForm, idx: usize, value: &str) {
        *form.value_mut(idx).unwrap() = value.to_string();
        form.guard(idx);
    }

    #[test]
    fn clamps_to_nearest_bound() {
        let bounds = Bounds::new(1, 120);
        let mut v = "150".to_string();
        assert!(clamp_to_bounds(&mut v, bounds));
        assert_eq!(v, "120");

        let mut v = "0".to_string();
        assert!(clamp_to_bounds(&mut v, bounds));
        assert_eq!(v, "1");

        let mut v = "-7".to_string();
        assert!(clamp_to_bounds(&mut v, bounds));
        assert_eq!(v, "1");
    }

    #[test]
    fn in_range_and_unparseable_values_are_untouched() {
        let bounds = Bounds::new(0, 10);
        for input in ["5", "2.5", "", "abc", "-", "."] {
            let mut v = input.to_string();
            assert!(!clamp_to_bounds(&mut v, bounds), "input {:?}", input);
            assert_eq!(v, input);
        }
    }

    #[test]
    fn fractional_values_compare_by_integer_part() {
        let mut v = "12.5".to_string();
        assert!(clamp_to_bounds(&mut v, Bounds::new(0, 10)));
        assert_eq!(v, "10");
    }

    #[test]
    fn missing_bounds_are_ignored() {
        let mut v = "99999".to_string();
        assert!(!clamp_to_bounds(&mut v, Bounds { min: None, max: None }));
        assert_eq!(v, "99999");

        let only_min = Bounds { min: Some(10), max: None };
        let mut v = "99999".to_string();
        assert!(!clamp_to_bounds(&mut v, only_min));
        let mut v = "3".to_string();
        assert!(clamp_to_bounds(&mut v, only_min));
        assert_eq!(v, "10");
    }

    #[test]
    fn huge_input_saturates_to_max() {
        let mut v = "99999999999999999999999".to_string();
        assert!(clamp_to_bounds(&mut v, Bounds::new(1, 120)));
        assert_eq!(v, "120");
    }

    #[test]
    fn every_edit_lands_in_range() {
        let mut form = PredictForm::default();
        for (idx, spec) in FIELDS.iter().enumerate() {
            let FieldKind::Number { bounds, .. } = spec.kind else {
                continue;
            };
            let (min, max) = (bounds.min.unwrap(), bounds.max.unwrap());
            for candidate in [min - 100, min - 1, min, (min + max) / 2, max, max + 1, max * 10] {
                edit(&mut form, idx, &candidate.to_string());
                let stored: i64 = form.value(idx).parse().unwrap();
                assert!((min..=max).contains(&stored), "{} = {}", spec.name, stored);
            }
        }
    }

    #[test]
    fn choice_fields_are_not_guarded() {
        let mut form = PredictForm::default();
        let idx = field_index("sex");
        edit(&mut form, idx, "7");
        assert_eq!(form.value(idx), "7");
    }

    #[test]
    fn encode_keeps_schema_order() {
        let mut form = PredictForm::default();
        edit(&mut form, field_index("age"), "58");
        let names: Vec<String> = form.encode().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            [
                "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang",
                "oldpeak", "slope", "ca", "thal"
            ]
        );
        assert_eq!(form.encode()[0].1, "58");
    }

    #[test]
    fn clear_restores_initial_values() {
        let mut form = PredictForm::default();
        edit(&mut form, field_index("age"), "58");
        edit(&mut form, field_index("cp"), "2");
        form.clear();
        assert_eq!(form.value(field_index("age")), "");
        assert_eq!(form.value(field_index("cp")), "0");
    }
}
