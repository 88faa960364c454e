//! Compiled-in product data.
//!
//! The storefront shows exactly one product; everything about it (name,
//! price, description, image list) is a literal here. There is no inventory
//! or pricing source behind this module.

/// The product shown on the shopping page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    /// Ordered image identifiers, resolved through [`art_for`].
    pub images: &'static [&'static str],
}

pub const PRODUCT: Product = Product {
    name: "Runner Mk.III",
    price: "$100",
    description: "Lightweight everyday runner with a knit upper, cushioned \
                  midsole and a grippy outsole. Wear-tested on pavement, \
                  track and the occasional trail.",
    images: &["runner-side", "runner-top", "runner-sole"],
};

/// Resolves an image identifier to its ASCII art panel.
///
/// This is the terminal stand-in for the host image loader: the carousel
/// hands it an identifier and gets rows of art back. Unknown identifiers
/// return `None`; how that renders (a placeholder panel) is the carousel's
/// business, not an error of this module.
pub fn art_for(id: &str) -> Option<&'static [&'static str]> {
    match id {
        "runner-side" => Some(&[
            r"                                  ____",
            r"                          __..--''    ``-.",
            r"                  __..--''     .----.     \",
            r"          __..--''            ( logo )     |",
            r"   __..--'                     `----'      |",
            r"  /_______________________________________/|",
            r"  |o  o  o  o  o  o  o  o  o  o  o  o  o |/",
            r"  `--------------------------------------'",
        ]),
        "runner-top" => Some(&[
            r"        ______________________________",
            r"       /         ||  ||  ||           \",
            r"      |  ______  ||  ||  ||  ______    |",
            r"      | (laces ) ||  ||  || ( heel )   |",
            r"      |  ------  ||  ||  ||  ------    |",
            r"       \_________||__||__||___________/",
        ]),
        "runner-sole" => Some(&[
            r"     _____________________________________",
            r"    / = = = = = = = = = = = = = = = = = = \",
            r"   |  o   o   o   o   o   o   o   o   o    |",
            r"   |    o   o   o   o   o   o   o   o      |",
            r"    \ = = = = = = = = = = = = = = = = = = /",
            r"     -------------------------------------",
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_image_resolves() {
        for id in PRODUCT.images {
            assert!(art_for(id).is_some(), "no art for {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(art_for("runner-back").is_none());
    }
}
