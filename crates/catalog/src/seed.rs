use happycat_core::GifRecord;

use crate::object_id;

/// The catalog the API ships with: sixteen internet-famous cats. Each entry
/// gets a fresh id at startup. `applecat` and `orangelolcat` share the
/// `applecat` tag, so that tag bucket holds two records.
pub fn seed_records() -> Vec<GifRecord> {
    SEED
        .iter()
        .map(|(name, url, tags)| GifRecord {
            id: Some(object_id::generate()),
            name: (*name).to_string(),
            url: (*url).to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect()
}

const SEED: &[(&str, &str, &[&str])] = &[
    ("happycat", "https://tenor.com/bXAn9.gif", &["happycat"]),
    ("carla", "https://tenor.com/rJ4PNMf6dC5.gif", &["carla"]),
    ("ripcarla", "https://tenor.com/b78eKUM95k3.gif", &["ripcarla"]),
    ("huhcat", "https://tenor.com/sqMU1WMDcgD.gif", &["huhcat"]),
    ("chipichipi", "https://tenor.com/dpqqxee0PFw.gif", &["chipichipi"]),
    ("hdldance", "https://tenor.com/sKMxKWD1BOs.gif", &["hdldance"]),
    ("heyyoucat", "https://tenor.com/mpDJICZ3lTJ.gif", &["heyyoucat"]),
    ("oiia", "https://tenor.com/fFr2do9u7Kw.gif", &["oiia"]),
    ("crunchycat", "https://tenor.com/qPlYb0nisbU.gif", &["crunchycat"]),
    ("maxwell", "https://tenor.com/cNWODIeA4CV.gif", &["maxwell"]),
    ("applecat", "https://tenor.com/bpwiu.gif", &["applecat"]),
    ("bananacatcry", "https://tenor.com/bmdCBZrB9Jm.gif", &["bananacatcry"]),
    ("bananacatwalk", "https://tenor.com/G15XUSxrbT.gif", &["bananacatwalk"]),
    ("orangelolcat", "https://tenor.com/ft2fuNAbJ2T.gif", &["applecat"]),
    ("sickcat", "https://tenor.com/safyMl4za99.gif", &["sickcat"]),
    ("blinkcat", "https://tenor.com/fLz7Y2ikd98.gif", &["blinkcat"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_satisfies_uniqueness_invariants() {
        let records = seed_records();
        let names: HashSet<_> = records.iter().map(|r| r.name.as_str()).collect();
        let urls: HashSet<_> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(names.len(), records.len());
        assert_eq!(urls.len(), records.len());
        assert!(records.iter().all(|r| r.id.is_some()));
    }
}
