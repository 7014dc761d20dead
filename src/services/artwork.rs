//! Artwork image URLs.

use crate::constants::ARTWORK_URL_TEMPLATE;

/// Image URL for a pokédex number. The URL is not checked for existence.
#[must_use]
pub fn artwork_url(pokedex_number: u32) -> String {
    ARTWORK_URL_TEMPLATE.replace("{n}", &pokedex_number.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_url() {
        assert_eq!(
            artwork_url(25),
            "https://github.com/kvpratama/gan/raw/master/pokemon/data/pokemon/25.jpg"
        );
    }
}
