// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Property tests for the ordering laws of parsed versions

use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};

use proptest::{
    collection::vec,
    prelude::{Just, Strategy, any, prop_assert, prop_assert_eq, prop_oneof},
    proptest,
    sample::select,
};

use vercheck::{
    ParsedVersion, compare, extract_major, extract_minor, extract_patch, extract_suffix,
    is_newer, parse,
};

const SUFFIX_CHARS: [char; 12] = ['a', 'b', 'c', 'r', 'A', 'B', 'C', 'R', '0', '1', '2', '9'];

#[derive(Debug, Clone)]
struct Parts {
    major: String,
    minor: String,
    patch: String,
    suffix: String,
}

impl Parts {
    fn render(&self) -> String {
        let Self {
            major,
            minor,
            patch,
            suffix,
        } = self;
        if suffix.is_empty() {
            format!("{major}.{minor}.{patch}")
        } else {
            format!("{major}.{minor}.{patch}-{suffix}")
        }
    }

    /// Same release written differently: extra leading zeros, flipped suffix case
    fn respelled(&self, zeros: usize) -> Self {
        let pad = "0".repeat(zeros);
        Self {
            major: format!("{pad}{}", self.major),
            minor: format!("{pad}{}", self.minor),
            patch: format!("{pad}{}", self.patch),
            suffix: self
                .suffix
                .chars()
                .map(|c| {
                    if c.is_ascii_lowercase() {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect(),
        }
    }
}

fn digits() -> impl Strategy<Value = String> {
    vec(0_u8..=9, 1..6).prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect::<String>())
}

fn suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        vec(select(SUFFIX_CHARS.to_vec()), 1..5).prop_map(|cs| cs.into_iter().collect::<String>()),
    ]
}

fn version_parts() -> impl Strategy<Value = Parts> {
    (digits(), digits(), digits(), suffix()).prop_map(|(major, minor, patch, suffix)| Parts {
        major,
        minor,
        patch,
        suffix,
    })
}

fn version() -> impl Strategy<Value = ParsedVersion> {
    version_parts().prop_map(|parts| {
        parse(&parts.render()).unwrap_or_else(|e| panic!("generated {parts:?} must parse: {e}"))
    })
}

fn hash_of(version: &ParsedVersion) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn display_round_trips(parts in version_parts()) {
        let raw = parts.render();
        prop_assert_eq!(parse(&raw).unwrap().to_string(), raw);
    }

    #[test]
    fn ordering_is_reflexive(a in version()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
        prop_assert!(a == a.clone());
    }

    #[test]
    fn ordering_is_antisymmetric(a in version(), b in version()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        if a > b {
            prop_assert!(!(b > a));
        }
    }

    #[test]
    fn ordering_is_transitive(a in version(), b in version(), c in version()) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    #[test]
    fn equality_matches_compare(a in version(), b in version()) {
        prop_assert_eq!(a == b, compare(&a, &b) == Ordering::Equal);
    }

    #[test]
    fn respelled_versions_are_equal_and_hash_equal(parts in version_parts(), zeros in 0_usize..3) {
        let a = parse(&parts.render()).unwrap();
        let b = parse(&parts.respelled(zeros).render()).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn numeric_segments_order_like_integers(x in any::<u64>(), y in any::<u64>()) {
        let expected = x.cmp(&y);
        for (a, b) in [
            (format!("{x}.0.0"), format!("{y}.0.0")),
            (format!("1.{x}.0"), format!("1.{y}.0")),
            (format!("1.0.{x}-rc"), format!("1.0.{y}-rc")),
        ] {
            prop_assert_eq!(compare(&parse(&a).unwrap(), &parse(&b).unwrap()), expected);
        }
    }

    #[test]
    fn release_beats_its_own_candidates(parts in version_parts(), tag in suffix()) {
        let release = Parts { suffix: String::new(), ..parts.clone() };
        let candidate = Parts { suffix: format!("{tag}x"), ..parts };
        prop_assert!(parse(&release.render()).unwrap() > parse(&candidate.render()).unwrap());
    }

    #[test]
    fn is_newer_agrees_with_compare(a in version_parts(), b in version_parts()) {
        let (a, b) = (a.render(), b.render());
        let expected = compare(&parse(&a).unwrap(), &parse(&b).unwrap()) == Ordering::Greater;
        prop_assert_eq!(is_newer(&a, &b), Ok(expected));
    }

    #[test]
    fn extraction_agrees_with_parse(parts in version_parts()) {
        let raw = parts.render();
        let version = parse(&raw).unwrap();
        prop_assert_eq!(extract_major(&raw), Ok(version.major()));
        prop_assert_eq!(extract_minor(&raw), Ok(version.minor()));
        prop_assert_eq!(extract_patch(&raw), Ok(version.patch()));
        prop_assert_eq!(extract_suffix(&raw), Ok(version.suffix()));
    }

    #[test]
    fn extraction_rejects_exactly_what_parse_rejects(raw in "[0-9a-zA-Z.\\-_ ]{0,14}") {
        match parse(&raw) {
            Ok(version) => {
                prop_assert_eq!(extract_major(&raw), Ok(version.major()));
                prop_assert_eq!(extract_suffix(&raw), Ok(version.suffix()));
            }
            Err(error) => {
                prop_assert_eq!(extract_major(&raw), Err(error.clone()));
                prop_assert_eq!(extract_minor(&raw), Err(error.clone()));
                prop_assert_eq!(extract_patch(&raw), Err(error.clone()));
                prop_assert_eq!(extract_suffix(&raw), Err(error));
            }
        }
    }
}
