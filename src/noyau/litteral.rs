// src/noyau/litteral.rs
//
// Décodage d’un littéral entier : préfixe de base + suffixe d’unité.
//
//   [0x|0o|0b] chiffres [T|G|M|K]
//
// Ordre fixe :
// 1) Operande::Value => déjà décodé, rendu tel quel
// 2) préfixe (insensible à la casse, seulement si longueur > 2)
// 3) suffixe (insensible à la casse, seulement si longueur restante > 1)
// 4) validation du corps contre l’alphabet de la base
// 5) lecture directe dans la base, PUIS multiplication par l’unité
//
// NOTE (5): on ne compose pas “unité puis base” à travers une chaîne décimale :
// "0xff" vaut bien 255 et "0x10K" vaut 16 * 1024.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::One;
use regex::Regex;

use super::erreur::{CalcError, Result};

/// Opérande d’un opérateur : littéral brut (feuille) ou valeur déjà calculée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Literal(String),
    Value(BigInt),
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Literal(s.to_owned())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Literal(s)
    }
}

impl From<BigInt> for Operand {
    fn from(v: BigInt) -> Self {
        Operand::Value(v)
    }
}

/* ------------------------ Bases ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    Hex,
    Dec,
    Oct,
    Bin,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Hex, Base::Dec, Base::Oct, Base::Bin];

    /// Préfixe en minuscules ("" pour le décimal).
    pub fn prefix(self) -> &'static str {
        match self {
            Base::Hex => "0x",
            Base::Dec => "",
            Base::Oct => "0o",
            Base::Bin => "0b",
        }
    }

    pub fn radix(self) -> u32 {
        match self {
            Base::Hex => 16,
            Base::Dec => 10,
            Base::Oct => 8,
            Base::Bin => 2,
        }
    }

    fn from_prefix(p: &str) -> Option<Base> {
        Base::ALL
            .into_iter()
            .find(|b| !b.prefix().is_empty() && b.prefix() == p)
    }

    fn motif(self) -> &'static Regex {
        // Compilés une seule fois, lecture seule ensuite.
        static MOTIFS: OnceLock<[Regex; 4]> = OnceLock::new();
        let motifs = MOTIFS.get_or_init(|| {
            [
                r"^[0-9a-fA-F]+$",
                r"^[0-9]+$",
                r"^[0-7]+$",
                r"^[0-1]+$",
            ]
            .map(|m| Regex::new(m).expect("motif de base invalide"))
        });

        match self {
            Base::Hex => &motifs[0],
            Base::Dec => &motifs[1],
            Base::Oct => &motifs[2],
            Base::Bin => &motifs[3],
        }
    }

    /// Le corps (sans préfixe ni suffixe) respecte-t-il l’alphabet de la base ?
    pub fn accepte(self, corps: &str) -> bool {
        self.motif().is_match(corps)
    }
}

/* ------------------------ Unités (puissances de 2) ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    T,
    G,
    M,
    K,
    One,
}

impl Unit {
    fn from_suffix(c: char) -> Option<Unit> {
        match c.to_ascii_uppercase() {
            'T' => Some(Unit::T),
            'G' => Some(Unit::G),
            'M' => Some(Unit::M),
            'K' => Some(Unit::K),
            _ => None,
        }
    }

    /// Exposant de 2 du multiplicateur.
    pub fn shift(self) -> u32 {
        match self {
            Unit::T => 40,
            Unit::G => 30,
            Unit::M => 20,
            Unit::K => 10,
            Unit::One => 0,
        }
    }

    pub fn scale(self) -> BigInt {
        BigInt::one() << self.shift()
    }
}

/* ------------------------ Découpage ------------------------ */

fn detecte_base(s: &str) -> (Base, &str) {
    if s.chars().count() > 2 {
        if let Some(tete) = s.get(..2) {
            if let Some(base) = Base::from_prefix(&tete.to_ascii_lowercase()) {
                return (base, &s[2..]);
            }
        }
    }
    (Base::Dec, s)
}

fn detecte_unite(s: &str) -> (Unit, &str) {
    if s.chars().count() > 1 {
        if let Some(c) = s.chars().next_back() {
            if let Some(unite) = Unit::from_suffix(c) {
                return (unite, &s[..s.len() - c.len_utf8()]);
            }
        }
    }
    (Unit::One, s)
}

/* ------------------------ API ------------------------ */

/// Convertit un opérande en entier.
/// - Value : rendu tel quel (re-normalisation d’un résultat intermédiaire)
/// - Literal : préfixe / suffixe / validation / lecture
pub fn decode(operande: Operand) -> Result<BigInt> {
    match operande {
        Operand::Value(v) => Ok(v),
        Operand::Literal(s) => decode_str(&s),
    }
}

pub fn decode_str(jeton: &str) -> Result<BigInt> {
    let (base, reste) = detecte_base(jeton);
    let (unite, corps) = detecte_unite(reste);

    if !base.accepte(corps) {
        return Err(CalcError::Format(jeton.to_owned()));
    }

    let n = BigInt::parse_bytes(corps.as_bytes(), base.radix())
        .ok_or_else(|| CalcError::Format(jeton.to_owned()))?;

    Ok(n * unite.scale())
}
