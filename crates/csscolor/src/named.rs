//! The catalogs of named CSS colors.
//!
//! Both catalogs pair a color code with a color name. Several names share the
//! same code, e.g., `aqua` and `cyan` or `darkgray` and `darkgrey`.

/// The 17 basic named colors of CSS 2.1.
pub const BASIC_COLORS: [(&str, &str); 17] = [
    ("#000000", "black"),
    ("#C0C0C0", "silver"),
    ("#808080", "gray"),
    ("#FFFFFF", "white"),
    ("#800000", "maroon"),
    ("#FF0000", "red"),
    ("#800080", "purple"),
    ("#FF00FF", "fuchsia"),
    ("#008000", "green"),
    ("#00FF00", "lime"),
    ("#808000", "olive"),
    ("#FFFF00", "yellow"),
    ("#000080", "navy"),
    ("#0000FF", "blue"),
    ("#008080", "teal"),
    ("#00FFFF", "aqua"),
    ("#FFA500", "orange"),
];

/// The extended named colors of CSS 3, in alphabetical order.
pub const EXTENDED_COLORS: [(&str, &str); 147] = [
    ("#F0F8FF", "aliceblue"),
    ("#FAEBD7", "antiquewhite"),
    ("#00FFFF", "aqua"),
    ("#7FFFD4", "aquamarine"),
    ("#F0FFFF", "azure"),
    ("#F5F5DC", "beige"),
    ("#FFE4C4", "bisque"),
    ("#000000", "black"),
    ("#FFEBCD", "blanchedalmond"),
    ("#0000FF", "blue"),
    ("#8A2BE2", "blueviolet"),
    ("#A52A2A", "brown"),
    ("#DEB887", "burlywood"),
    ("#5F9EA0", "cadetblue"),
    ("#7FFF00", "chartreuse"),
    ("#D2691E", "chocolate"),
    ("#FF7F50", "coral"),
    ("#6495ED", "cornflowerblue"),
    ("#FFF8DC", "cornsilk"),
    ("#DC143C", "crimson"),
    ("#00FFFF", "cyan"),
    ("#00008B", "darkblue"),
    ("#008B8B", "darkcyan"),
    ("#B8860B", "darkgoldenrod"),
    ("#A9A9A9", "darkgray"),
    ("#006400", "darkgreen"),
    ("#A9A9A9", "darkgrey"),
    ("#BDB76B", "darkkhaki"),
    ("#8B008B", "darkmagenta"),
    ("#556B2F", "darkolivegreen"),
    ("#FF8C00", "darkorange"),
    ("#9932CC", "darkorchid"),
    ("#8B0000", "darkred"),
    ("#E9967A", "darksalmon"),
    ("#8FBC8F", "darkseagreen"),
    ("#483D8B", "darkslateblue"),
    ("#2F4F4F", "darkslategray"),
    ("#2F4F4F", "darkslategrey"),
    ("#00CED1", "darkturquoise"),
    ("#9400D3", "darkviolet"),
    ("#FF1493", "deeppink"),
    ("#00BFFF", "deepskyblue"),
    ("#696969", "dimgray"),
    ("#696969", "dimgrey"),
    ("#1E90FF", "dodgerblue"),
    ("#B22222", "firebrick"),
    ("#FFFAF0", "floralwhite"),
    ("#228B22", "forestgreen"),
    ("#FF00FF", "fuchsia"),
    ("#DCDCDC", "gainsboro"),
    ("#F8F8FF", "ghostwhite"),
    ("#FFD700", "gold"),
    ("#DAA520", "goldenrod"),
    ("#808080", "gray"),
    ("#008000", "green"),
    ("#ADFF2F", "greenyellow"),
    ("#808080", "grey"),
    ("#F0FFF0", "honeydew"),
    ("#FF69B4", "hotpink"),
    ("#CD5C5C", "indianred"),
    ("#4B0082", "indigo"),
    ("#FFFFF0", "ivory"),
    ("#F0E68C", "khaki"),
    ("#E6E6FA", "lavender"),
    ("#FFF0F5", "lavenderblush"),
    ("#7CFC00", "lawngreen"),
    ("#FFFACD", "lemonchiffon"),
    ("#ADD8E6", "lightblue"),
    ("#F08080", "lightcoral"),
    ("#E0FFFF", "lightcyan"),
    ("#FAFAD2", "lightgoldenrodyellow"),
    ("#D3D3D3", "lightgray"),
    ("#90EE90", "lightgreen"),
    ("#D3D3D3", "lightgrey"),
    ("#FFB6C1", "lightpink"),
    ("#FFA07A", "lightsalmon"),
    ("#20B2AA", "lightseagreen"),
    ("#87CEFA", "lightskyblue"),
    ("#778899", "lightslategray"),
    ("#778899", "lightslategrey"),
    ("#B0C4DE", "lightsteelblue"),
    ("#FFFFE0", "lightyellow"),
    ("#00FF00", "lime"),
    ("#32CD32", "limegreen"),
    ("#FAF0E6", "linen"),
    ("#FF00FF", "magenta"),
    ("#800000", "maroon"),
    ("#66CDAA", "mediumaquamarine"),
    ("#0000CD", "mediumblue"),
    ("#BA55D3", "mediumorchid"),
    ("#9370DB", "mediumpurple"),
    ("#3CB371", "mediumseagreen"),
    ("#7B68EE", "mediumslateblue"),
    ("#00FA9A", "mediumspringgreen"),
    ("#48D1CC", "mediumturquoise"),
    ("#C71585", "mediumvioletred"),
    ("#191970", "midnightblue"),
    ("#F5FFFA", "mintcream"),
    ("#FFE4E1", "mistyrose"),
    ("#FFE4B5", "moccasin"),
    ("#FFDEAD", "navajowhite"),
    ("#000080", "navy"),
    ("#FDF5E6", "oldlace"),
    ("#808000", "olive"),
    ("#6B8E23", "olivedrab"),
    ("#FFA500", "orange"),
    ("#FF4500", "orangered"),
    ("#DA70D6", "orchid"),
    ("#EEE8AA", "palegoldenrod"),
    ("#98FB98", "palegreen"),
    ("#AFEEEE", "paleturquoise"),
    ("#DB7093", "palevioletred"),
    ("#FFEFD5", "papayawhip"),
    ("#FFDAB9", "peachpuff"),
    ("#CD853F", "peru"),
    ("#FFC0CB", "pink"),
    ("#DDA0DD", "plum"),
    ("#B0E0E6", "powderblue"),
    ("#800080", "purple"),
    ("#FF0000", "red"),
    ("#BC8F8F", "rosybrown"),
    ("#4169E1", "royalblue"),
    ("#8B4513", "saddlebrown"),
    ("#FA8072", "salmon"),
    ("#F4A460", "sandybrown"),
    ("#2E8B57", "seagreen"),
    ("#FFF5EE", "seashell"),
    ("#A0522D", "sienna"),
    ("#C0C0C0", "silver"),
    ("#87CEEB", "skyblue"),
    ("#6A5ACD", "slateblue"),
    ("#708090", "slategray"),
    ("#708090", "slategrey"),
    ("#FFFAFA", "snow"),
    ("#00FF7F", "springgreen"),
    ("#4682B4", "steelblue"),
    ("#D2B48C", "tan"),
    ("#008080", "teal"),
    ("#D8BFD8", "thistle"),
    ("#FF6347", "tomato"),
    ("#40E0D0", "turquoise"),
    ("#EE82EE", "violet"),
    ("#F5DEB3", "wheat"),
    ("#FFFFFF", "white"),
    ("#F5F5F5", "whitesmoke"),
    ("#FFFF00", "yellow"),
    ("#9ACD32", "yellowgreen"),
];

/// Iterate over all named colors, first the basic and then the extended ones.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    BASIC_COLORS.iter().chain(EXTENDED_COLORS.iter()).copied()
}

/// Look up the color code for the given name.
///
/// Names are matched case-insensitively, as in CSS.
///
/// ```
/// # use csscolor::named;
/// assert_eq!(named::lookup("Coral"), Some("#FF7F50"));
/// assert_eq!(named::lookup("no such color"), None);
/// ```
pub fn lookup(name: &str) -> Option<&'static str> {
    all()
        .find(|&(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(code, _)| code)
}

#[cfg(test)]
mod test {
    use super::{all, lookup, BASIC_COLORS, EXTENDED_COLORS};
    use crate::string::code_to_rgb;

    #[test]
    fn test_catalogs() {
        assert_eq!(all().count(), BASIC_COLORS.len() + EXTENDED_COLORS.len());
        assert_eq!(all().next(), Some(("#000000", "black")));
        assert_eq!(all().last(), Some(("#9ACD32", "yellowgreen")));

        for (code, name) in all() {
            assert_eq!(code.len(), 7, "malformed code for {}", name);
            assert_eq!(code_to_rgb(code).to_string(), code, "non-canonical code for {}", name);
        }

        // Every basic color reappears in the extended catalog with the same code.
        for (code, name) in BASIC_COLORS {
            assert!(EXTENDED_COLORS.contains(&(code, name)), "{} is missing", name);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("red"), Some("#FF0000"));
        assert_eq!(lookup("DarkSlateGrey"), Some("#2F4F4F"));
        assert_eq!(lookup("cyan"), lookup("aqua"));
        assert_eq!(lookup("rebeccapurple"), None);
    }
}
