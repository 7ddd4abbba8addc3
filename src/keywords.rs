//! Named-color tables and nearest-keyword matching.
//!
//! Two fixed sets are shipped: the 16 basic HTML keywords and the full CSS
//! named-color list. Both are sorted by name so lookups are binary searches
//! over static data, and both are safe for unsynchronized concurrent reads.

use crate::color::Color;

/// Which named-color table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSet {
    /// The 16 basic HTML color keywords.
    Base,
    /// The full CSS named-color list, a superset of [`KeywordSet::Base`].
    Extended,
}

/// Basic HTML color keywords, sorted by name.
static BASE: [(&str, [u8; 3]); 16] = [
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("teal", [0, 128, 128]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

/// CSS named colors, sorted by name. Synonym pairs such as `gray`/`grey`
/// are distinct entries with identical values.
static EXTENDED: [(&str, [u8; 3]); 148] = [
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

fn table(set: KeywordSet) -> &'static [(&'static str, [u8; 3])] {
    match set {
        KeywordSet::Base => &BASE,
        KeywordSet::Extended => &EXTENDED,
    }
}

/// Looks up a lowercase keyword in the given set.
#[must_use]
pub fn lookup(name: &str, set: KeywordSet) -> Option<[u8; 3]> {
    let entries = table(set);
    entries
        .binary_search_by_key(&name, |&(keyword, _)| keyword)
        .ok()
        .map(|index| entries[index].1)
}

/// Iterates all `(name, rgb)` entries of the given set in name order.
pub fn entries(set: KeywordSet) -> impl Iterator<Item = (&'static str, [u8; 3])> {
    table(set).iter().copied()
}

impl Color {
    /// Finds the named color matching this color, ignoring alpha unless it
    /// is exactly zero, in which case the result is always `transparent`.
    ///
    /// With `find_closest` the nearest keyword by total per-channel
    /// distance is returned, ties going to the candidate with the smaller
    /// largest single-channel difference. Without it only exact matches
    /// count. `None` means no keyword qualified.
    ///
    /// # Examples
    ///
    /// ```
    /// use matiz::Color;
    ///
    /// let mut color = Color::new();
    /// color.set_rgb(125.0, 140.0, 10.0);
    /// assert_eq!(color.to_keyword(true, false), Some("olive"));
    /// assert_eq!(color.to_keyword(false, false), None);
    /// ```
    pub fn to_keyword(&mut self, find_closest: bool, extended: bool) -> Option<&'static str> {
        if self.get_alpha() == 0.0 {
            return Some("transparent");
        }

        let set = if extended {
            KeywordSet::Extended
        } else {
            KeywordSet::Base
        };
        let color = self.get_rgb(false);

        let mut best = None;
        let mut margin = if find_closest { 1000.0 } else { 1.0 };
        let mut component_margin = if find_closest { 256.0 } else { 1.0 };

        for (keyword, rgb) in entries(set) {
            let mut diff = 0.0;
            let mut max_component_diff = 0.0f64;
            for i in 0..3 {
                let component_diff = (f64::from(rgb[i]) - color[i]).abs();
                diff += component_diff;
                if diff > margin {
                    break;
                }
                max_component_diff = max_component_diff.max(component_diff);
            }

            if diff == 0.0 {
                return Some(keyword);
            }

            if find_closest && diff < margin {
                best = Some(keyword);
                margin = diff;
                component_margin = max_component_diff;
            } else if find_closest && diff == margin && max_component_diff < component_margin {
                best = Some(keyword);
                component_margin = max_component_diff;
            }
        }

        best
    }
}
