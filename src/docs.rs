//! User-facing descriptions of every accepted color format, for config file comments and help
//! output.

use std::fmt;

/// Where a color is written, which changes the quoting rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocContext {
    /// A color used as a value.
    #[default]
    Value,
    /// A color used as a map key.
    Key,
}

/// One accepted format with a description and examples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatDoc {
    pub name: &'static str,
    pub description: String,
    pub examples: &'static [&'static str],
}

impl fmt::Display for FormatDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for line in self.description.lines() {
            writeln!(f, "  {line}")?;
        }
        write!(f, "  Examples: {}", self.examples.join(", "))
    }
}

pub fn format_documentation(context: DocContext) -> Vec<FormatDoc> {
    let names_quoting = match context {
        DocContext::Value => "Must be quoted.",
        DocContext::Key => "May or may not be quoted.",
    };
    let mut modifiers = String::from(
        "Colors specified in any of the above formats can be modified by using modifiers.\n\
         Modifiers are specified after any color in the format \"<+, -, or =><h, s, v, r, g, b, or a><amount>\".\n\
         The letters represent h - hue, s - saturation, v - value, r - red, g - green, b - blue, a - alpha.\n\
         Valid amounts are 1 to 255 for all types except hue, which accepts 1 to 359.",
    );
    if context == DocContext::Key {
        modifiers.push_str("\nUsing any modifiers will REQUIRE the key to be quoted.");
    }

    vec![
        FormatDoc {
            name: "Hex color code",
            description: "A hex color code is preceded by # or 0x and must be quoted. Supports 3, 4, 6, or 8 digit codes \
                          in the formats RGB, ARGB, RRGGBB, or AARRGGBB."
                .to_string(),
            examples: &["\"#F4C\"", "\"0xFEE0\"", "\"#40FF2E\"", "\"#CC00E2EE\""],
        },
        FormatDoc {
            name: "Decimal color code",
            description: "A decimal color code, which is just a hex color code converted to decimal. May or may not be quoted."
                .to_string(),
            examples: &["15614720", "\"4278251143\""],
        },
        FormatDoc {
            name: "Game color name",
            description: format!("One of the standard 16 game color names. {names_quoting}"),
            examples: &["\"red\"", "\"dark_purple\"", "\"gold\""],
        },
        FormatDoc {
            name: "Web color name",
            description: format!("One of the standard 140 web/HTML color names or \"transparent\". {names_quoting}"),
            examples: &["\"chartreuse\"", "\"darkorange\"", "\"deeppink\"", "\"deepskyblue\""],
        },
        FormatDoc {
            name: "Modifiers",
            description: modifiers,
            examples: &["\"red+h15\"", "\"#saddlebrown-v20+s5\"", "\"10_aqua_aqua+v15-h5\"", "\"#F4C-r15-v10=a40\""],
        },
        FormatDoc {
            name: "Animated color",
            description: format!(
                "An animated color that fades from one to another in sequence.\n\
                 A string in the format \"<duration in seconds>_<list of color definitions separated by underscores>\". \
                 {names_quoting}"
            ),
            examples: &["\"10_black_#7FFF00\"", "\"5.5_gold_orange_orangered\"", "\"20_red_orange_yellow_green_blue_purple\""],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteRegistry;
    use crate::parse::{ColorDescriptor, ColorParser};
    use rstest::rstest;

    #[rstest]
    #[case(DocContext::Value)]
    #[case(DocContext::Key)]
    fn every_example_resolves(#[case] context: DocContext) {
        let palettes = PaletteRegistry::new();
        let parser = ColorParser::new(&palettes);
        for doc in format_documentation(context) {
            for example in doc.examples {
                let descriptor: ColorDescriptor = serde_yaml::from_str(example).expect("failed to parse example");
                assert!(parser.validate(&descriptor), "{} example {example} doesn't resolve", doc.name);
            }
        }
    }

    #[test]
    fn keys_mention_quoting_modifiers() {
        let values = format_documentation(DocContext::Value);
        let keys = format_documentation(DocContext::Key);
        assert_eq!(values.len(), 6);
        assert!(!values[4].description.contains("REQUIRE"));
        assert!(keys[4].description.contains("REQUIRE the key to be quoted"));
        assert!(keys[2].description.ends_with("May or may not be quoted."));
    }

    #[test]
    fn display() {
        let doc = &format_documentation(DocContext::Value)[1];
        assert_eq!(
            doc.to_string(),
            "Decimal color code\n  A decimal color code, which is just a hex color code converted to decimal. May or may not be quoted.\n  Examples: 15614720, \"4278251143\""
        );
    }
}
