// src/noyau/operateur.rs
//
// Opérateurs binaires : symbole, priorité, calcul.
//
// Priorités (plus petit = évalué en dernier, devient racine) :
//   + -     => 1
//   * / ^   => 2   (^ partage la priorité de * et /, associatif à gauche)

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::{CalcError, Result};
use super::litteral::{decode, Operand};

/// Taille maximale (en bits) d’une puissance : ~315 000 chiffres décimaux.
pub const MAX_BITS_PUISSANCE: u64 = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub const ALL: [Op; 5] = [Op::Add, Op::Sub, Op::Mul, Op::Div, Op::Pow];

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Pow => 2,
        }
    }

    pub fn from_char(c: char) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Reconnaît un jeton opérateur (exactement un symbole).
    pub fn from_token(t: &str) -> Option<Op> {
        let mut it = t.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Op::from_char(c),
            _ => None,
        }
    }

    /// Applique l’opérateur à (gauche, droite), dans cet ordre.
    /// Chaque opérande repasse par le décodeur (sans effet sur une valeur déjà calculée).
    pub fn apply(self, gauche: Operand, droite: Operand) -> Result<BigInt> {
        let x = decode(gauche)?;
        let y = decode(droite)?;

        match self {
            Op::Add => Ok(x + y),
            Op::Sub => Ok(x - y),
            Op::Mul => Ok(x * y),
            Op::Div => {
                if y.is_zero() {
                    return Err(CalcError::Domain("division par zéro".into()));
                }
                // troncature vers zéro (convention num-bigint)
                Ok(x / y)
            }
            Op::Pow => {
                if y.is_negative() {
                    return Err(CalcError::Domain(format!("exposant négatif: {y}")));
                }
                let n = y
                    .to_u32()
                    .ok_or_else(|| CalcError::Domain(format!("exposant trop grand: {y}")))?;

                // |x| <= 1 : résultat borné quel que soit n.
                // Sinon bits(x^n) <= bits(x) * n, estimé AVANT le calcul.
                if x.bits() > 1 && x.bits().saturating_mul(u64::from(n)) > MAX_BITS_PUISSANCE {
                    return Err(CalcError::Domain(format!(
                        "résultat trop grand: {x}^{n} (max {MAX_BITS_PUISSANCE} bits)"
                    )));
                }
                Ok(x.pow(n))
            }
        }
    }
}
