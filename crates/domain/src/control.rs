//! Controls: form elements bound to one camera variable each.
//!
//! A control's behaviour depends only on its [`ControlKind`]: how an embedded
//! initial value is applied, and how its live state is sent to the device.

use std::fmt;

/// The closed set of control shapes the panel knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Checkbox-style on/off switch.
    Toggle,
    /// Drop-down list of options.
    Select,
    /// Slider with an adjacent label mirroring its value.
    Ranged,
    /// Any other input taking free text or numbers.
    TextLike,
}

impl ControlKind {
    /// Classify a form element from its tag name and `type` attribute.
    ///
    /// Returns `None` for elements the panel does not drive (buttons,
    /// text areas, plain containers…).
    #[must_use]
    pub fn classify(tag_name: &str, input_type: Option<&str>) -> Option<Self> {
        if tag_name.eq_ignore_ascii_case("select") {
            return Some(Self::Select);
        }
        if !tag_name.eq_ignore_ascii_case("input") {
            return None;
        }
        match input_type.map(str::to_ascii_lowercase).as_deref() {
            Some("checkbox") => Some(Self::Toggle),
            Some("range") => Some(Self::Ranged),
            _ => Some(Self::TextLike),
        }
    }

    /// Interpret an embedded initial value for this kind of control.
    ///
    /// Toggles are checked only for the literal `"1"`. Every other kind takes
    /// the literal as-is, with no check against the control's bounds.
    #[must_use]
    pub fn hydrate(self, literal: &str) -> ControlValue {
        match self {
            Self::Toggle => ControlValue::Checked(literal == "1"),
            Self::Select | Self::Ranged | Self::TextLike => ControlValue::Text(literal.to_string()),
        }
    }

    /// Whether value changes should be mirrored to an adjacent label.
    #[must_use]
    pub fn mirrors_label(self) -> bool {
        matches!(self, Self::Ranged)
    }
}

/// State to write into, or read from, a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    Checked(bool),
    Text(String),
}

impl ControlValue {
    /// The value as the device's `/control` endpoint expects it.
    #[must_use]
    pub fn wire_value(&self) -> &str {
        match self {
            Self::Checked(true) => "1",
            Self::Checked(false) => "0",
            Self::Text(text) => text,
        }
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

/// A form element bound to one device variable for the page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlElement {
    /// Device variable name, e.g. `brightness`.
    pub variable: String,
    pub kind: ControlKind,
    /// Value embedded by the device when it rendered the page.
    pub initial: Option<String>,
}

impl ControlElement {
    #[must_use]
    pub fn new(variable: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            variable: variable.into(),
            kind,
            initial: None,
        }
    }

    #[must_use]
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    /// The value to apply at load time, if the element carries one.
    #[must_use]
    pub fn hydrated_value(&self) -> Option<ControlValue> {
        self.initial.as_deref().map(|literal| self.kind.hydrate(literal))
    }
}

macro_rules! camera_variables {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Sensor variables the camera firmware accepts on `/control`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum CameraVariable {
            $($variant),+
        }

        impl CameraVariable {
            /// Every known variable, in the order the firmware documents them.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire name sent as the `var` query parameter.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }

            /// Look up a variable by its wire name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

camera_variables! {
    Quality => "quality",
    Brightness => "brightness",
    Contrast => "contrast",
    Saturation => "saturation",
    GainCeiling => "gainceiling",
    ColorBar => "colorbar",
    Awb => "awb",
    Agc => "agc",
    Aec => "aec",
    HMirror => "hmirror",
    VFlip => "vflip",
    AwbGain => "awb_gain",
    AgcGain => "agc_gain",
    AecValue => "aec_value",
    Aec2 => "aec2",
    Dcw => "dcw",
    Bpc => "bpc",
    Wpc => "wpc",
    RawGma => "raw_gma",
    Lenc => "lenc",
    SpecialEffect => "special_effect",
    WbMode => "wb_mode",
    AeLevel => "ae_level",
}

impl fmt::Display for CameraVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_check_toggle_only_for_literal_one() {
        assert_eq!(ControlKind::Toggle.hydrate("1"), ControlValue::Checked(true));
        for literal in ["0", "", "off", "true", " 1"] {
            assert_eq!(
                ControlKind::Toggle.hydrate(literal),
                ControlValue::Checked(false),
                "literal {literal:?}"
            );
        }
    }

    #[test]
    fn should_pass_out_of_range_literal_through_for_ranged() {
        assert_eq!(
            ControlKind::Ranged.hydrate("999"),
            ControlValue::Text("999".to_string())
        );
    }

    #[test]
    fn should_select_literal_option() {
        assert_eq!(
            ControlKind::Select.hydrate("2"),
            ControlValue::Text("2".to_string())
        );
    }

    #[test]
    fn should_classify_form_elements() {
        assert_eq!(ControlKind::classify("SELECT", None), Some(ControlKind::Select));
        assert_eq!(
            ControlKind::classify("INPUT", Some("checkbox")),
            Some(ControlKind::Toggle)
        );
        assert_eq!(
            ControlKind::classify("input", Some("RANGE")),
            Some(ControlKind::Ranged)
        );
        assert_eq!(
            ControlKind::classify("INPUT", Some("number")),
            Some(ControlKind::TextLike)
        );
        assert_eq!(ControlKind::classify("INPUT", None), Some(ControlKind::TextLike));
        assert_eq!(ControlKind::classify("BUTTON", None), None);
        assert_eq!(ControlKind::classify("DIV", None), None);
    }

    #[test]
    fn should_mirror_label_only_for_ranged() {
        assert!(ControlKind::Ranged.mirrors_label());
        assert!(!ControlKind::Toggle.mirrors_label());
        assert!(!ControlKind::Select.mirrors_label());
        assert!(!ControlKind::TextLike.mirrors_label());
    }

    #[test]
    fn should_encode_toggle_as_one_or_zero() {
        assert_eq!(ControlValue::Checked(true).wire_value(), "1");
        assert_eq!(ControlValue::Checked(false).wire_value(), "0");
        assert_eq!(ControlValue::Text("12".into()).wire_value(), "12");
    }

    #[test]
    fn should_hydrate_only_elements_with_initial_value() {
        let bare = ControlElement::new("awb", ControlKind::Toggle);
        assert!(bare.hydrated_value().is_none());

        let seeded = ControlElement::new("awb", ControlKind::Toggle).with_initial("1");
        assert_eq!(seeded.hydrated_value(), Some(ControlValue::Checked(true)));
    }

    #[test]
    fn should_resolve_camera_variables_by_wire_name() {
        assert_eq!(
            CameraVariable::from_name("special_effect"),
            Some(CameraVariable::SpecialEffect)
        );
        assert_eq!(CameraVariable::from_name("framesize"), None);
        for variable in CameraVariable::ALL {
            assert_eq!(CameraVariable::from_name(variable.name()), Some(*variable));
        }
    }
}
