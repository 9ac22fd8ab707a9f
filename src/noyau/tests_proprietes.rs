//! Tests de propriétés : invariants sur des entrées générées.
//!
//! - le décodeur rend inchangée une valeur déjà calculée
//! - un entier écrit dans n’importe quelle base (avec ou sans unité) se relit
//! - précédence et associativité comparées au calcul direct en i128
//! - le pipeline ne panique jamais, même sur du bruit

use num_bigint::BigInt;
use proptest::prelude::*;

use super::erreur::CalcError;
use super::eval::execute;
use super::litteral::{decode, Operand};

fn en_base(n: u64, radix: u32) -> String {
    BigInt::from(n).to_str_radix(radix)
}

proptest! {
    #[test]
    fn valeur_deja_decodee_inchangee(n in any::<i128>()) {
        let v = BigInt::from(n);
        prop_assert_eq!(decode(Operand::Value(v.clone())).unwrap(), v);
    }

    #[test]
    fn relecture_dans_chaque_base(n in any::<u64>()) {
        let attendu = BigInt::from(n);
        prop_assert_eq!(decode(Operand::from(en_base(n, 10))).unwrap(), attendu.clone());
        prop_assert_eq!(decode(Operand::from(format!("0x{}", en_base(n, 16)))).unwrap(), attendu.clone());
        prop_assert_eq!(decode(Operand::from(format!("0o{}", en_base(n, 8)))).unwrap(), attendu.clone());
        prop_assert_eq!(decode(Operand::from(format!("0b{}", en_base(n, 2)))).unwrap(), attendu);
    }

    #[test]
    fn unite_multiplie_apres_lecture(n in any::<u32>(), u in 0usize..4) {
        let (suffixe, shift) = [("K", 10u32), ("M", 20), ("G", 30), ("T", 40)][u];
        let attendu = BigInt::from(n) << shift;
        let hex = format!("0x{}{}", en_base(u64::from(n), 16), suffixe);
        prop_assert_eq!(decode(Operand::from(hex)).unwrap(), attendu);
    }

    #[test]
    fn precedence_comme_en_i128(a in 0i64..1000, b in 0i64..1000, c in 1i64..1000) {
        let attendu = i128::from(a) + i128::from(b) * i128::from(c) - i128::from(a) / i128::from(c);
        let s = format!("{a} + {b} * {c} - {a} / {c}");
        prop_assert_eq!(execute(&s).unwrap(), BigInt::from(attendu));
    }

    #[test]
    fn soustractions_associatives_a_gauche(xs in prop::collection::vec(0i64..10_000, 1..12)) {
        let s = xs.iter().map(|x| x.to_string()).collect::<Vec<_>>().join("-");
        let attendu = xs[1..].iter().fold(i128::from(xs[0]), |acc, x| acc - i128::from(*x));
        prop_assert_eq!(execute(&s).unwrap(), BigInt::from(attendu));
    }

    // sans '^' : un exposant aléatoire peut produire un nombre démesuré
    #[test]
    fn jamais_de_panique(s in "[0-9a-fxobKMGT+*/() -]{0,24}") {
        match execute(&s) {
            Ok(_) | Err(CalcError::Format(_)) | Err(CalcError::Domain(_)) | Err(CalcError::Empty) => {}
        }
    }
}
