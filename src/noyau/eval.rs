//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> arbre (découpage récursif) -> parcours -> BigInt
//!
//! Les feuilles sont décodées (base/unité) au moment du parcours, pas avant :
//! un littéral invalide n’est signalé que s’il est effectivement atteint.

use num_bigint::BigInt;

use super::arbre::{build, Node};
use super::erreur::{CalcError, Result};
use super::jetons::{format_tokens, tokenize};
use super::litteral::{decode, Operand};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub arbre: String,
}

/// Parcours récursif : tige => gauche, droite, puis opérateur ; feuille => décodage.
pub fn evaluate(tree: &Node) -> Result<BigInt> {
    match tree {
        Node::Stem { op, left, right } => {
            let g = evaluate(left)?;
            let d = evaluate(right)?;
            op.apply(Operand::Value(g), Operand::Value(d))
        }
        Node::Leaf(s) => decode(Operand::Literal(s.clone())),
    }
}

/// API principale : chaîne -> entier.
pub fn execute(input: &str) -> Result<BigInt> {
    eval_expression(input).map(|(v, _d)| v)
}

/// Comme `execute`, avec en plus la démarche (jetons + arbre) pour l’UI.
pub fn eval_expression(input: &str) -> Result<(BigInt, DemarcheNoyau)> {
    // 1) Jetons
    let jetons = tokenize(input);

    // 2) Arbre
    let arbre = build(&jetons)?.ok_or(CalcError::Empty)?;
    log::debug!("arbre: {arbre}");

    // 3) Parcours
    let valeur = evaluate(&arbre)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        arbre: arbre.to_string(),
    };

    Ok((valeur, d))
}
