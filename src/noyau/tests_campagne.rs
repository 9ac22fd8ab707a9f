//! Tests de campagne : tableau d’expressions + limites contrôlées.
//!
//! But : couvrir le pipeline de bout en bout sans faire chauffer la machine.
//! - budget temps global
//! - profondeur d’imbrication bornée (récursion = hauteur de l’arbre)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use pretty_assertions::assert_eq;

use super::erreur::CalcError;
use super::eval::execute;

fn eval_ok(expr: &str) -> String {
    execute(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .to_string()
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

#[test]
fn campagne_tableau() {
    let cas = [
        ("1+2*3", "7"),
        ("(1+2)*3", "9"),
        ("10-3-2", "5"),
        ("(1+2)*(3+4)", "21"),
        ("((2+3)*(4-1))^2", "225"),
        ("2^10 - 1K", "0"),
        ("0xFF + 0b1 - 0o400", "0"),
        ("4G / 1G", "4"),
        ("1T / 1K / 1K / 1K / 1K", "1"),
        ("0x10K / 16", "1024"),
        ("(0-1)*(0-1)", "1"),
        ("0 - 2^64", "-18446744073709551616"),
        ("  ( ( 42 ) )  ", "42"),
    ];

    for (expr, attendu) in cas {
        assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
    }
}

#[test]
fn campagne_erreurs() {
    let format = ["0xzz", "12a", "1 + ", "(", ")", "((1)", "1 2 3", "2^-1", "0x1.5", "1e3"];
    for expr in format {
        let e = execute(expr).unwrap_err();
        assert!(e.is_format(), "expr={expr:?} err={e:?}");
    }

    let domaine = ["1/0", "2^(0-1)", "0^(1-2)", "1K/(1K-1024)", "2^0x100000000"];
    for expr in domaine {
        let e = execute(expr).unwrap_err();
        assert!(e.is_domain(), "expr={expr:?} err={e:?}");
    }

    assert_eq!(execute(" \t ").unwrap_err(), CalcError::Empty);
}

#[test]
fn campagne_longue_chaine() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    // 1 + 1 + ... + 1 (500 termes) : arbre penché à gauche, hauteur 500
    let expr = vec!["1"; 500].join(" + ");
    assert_eq!(eval_ok(&expr), "500");
    budget(start, max);

    // 2*2*...*2 (200 facteurs) = 2^200
    let expr = vec!["2"; 200].join("*");
    assert_eq!(eval_ok(&expr), (BigInt::from(1u32) << 200u32).to_string());
    budget(start, max);
}

#[test]
fn campagne_imbrication_bornee() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    for profondeur in [1usize, 10, 50, 100] {
        let expr = format!("{}1+1{}", "(".repeat(profondeur), ")".repeat(profondeur));
        assert_eq!(eval_ok(&expr), "2", "profondeur={profondeur}");
        budget(start, max);
    }

    // (((1+1)*2)*2)... : imbrication à gauche
    let mut expr = String::from("1+1");
    for _ in 0..60 {
        expr = format!("({expr})*2");
    }
    assert_eq!(eval_ok(&expr), (BigInt::from(1u32) << 61u32).to_string());
    budget(start, max);
}

#[test]
fn campagne_expression_demesuree_refusee() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    // 50 000 termes : refus net (erreur), pas de débordement de pile
    let expr = vec!["1"; 50_000].join("+");
    let e = execute(&expr).unwrap_err();
    assert!(e.is_format(), "err={e:?}");
    budget(start, max);

    // imbrication profonde : même garde-fou
    let expr = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert!(execute(&expr).unwrap_err().is_format());
    budget(start, max);
}

#[test]
fn campagne_puissance_demesuree_refusee() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    for expr in ["3^100000000", "2^4294967295", "1T^1M", "(2^10)^200000"] {
        let e = execute(expr).unwrap_err();
        assert!(e.is_domain(), "expr={expr:?} err={e:?}");
        budget(start, max);
    }

    // la base ±1 reste calculable pour tout exposant u32
    assert_eq!(eval_ok("1^4294967295"), "1");
    assert_eq!(eval_ok("(0-1)^4294967295"), "-1");
    budget(start, max);
}
