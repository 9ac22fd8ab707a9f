// src/noyau/arbre.rs
//
// Jetons -> arbre binaire (découpage récursif)
//
// Règles:
// - 0 jeton  => pas d’arbre
// - 1 jeton  => feuille (chaîne brute, décodée seulement à l’évaluation)
// - sinon    => on retire les parenthèses englobantes, puis on coupe sur
//               l’opérateur de profondeur 0 de plus FAIBLE priorité,
//               en prenant le plus à DROITE en cas d’égalité.
//
// Le “plus à droite” donne l’associativité à gauche : 1+2+3 => (1+2)+3.

use std::fmt;

use super::erreur::{CalcError, Result};
use super::jetons::format_tokens;
use super::operateur::Op;

/// Garde-fou : au-delà, l’expression est refusée avant toute récursion.
/// La hauteur de l’arbre (donc la pile de build/evaluate/affichage/drop)
/// reste sous MAX_JETONS / 2.
pub const MAX_JETONS: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Littéral non décodé.
    Leaf(String),
    /// Application d’un opérateur (toujours deux enfants).
    Stem {
        op: Op,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Affichage totalement parenthésé : "((1 + 2) + 3)".
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(s) => f.write_str(s),
            Node::Stem { op, left, right } => write!(f, "({left} {} {right})", op.symbol()),
        }
    }
}

/// Les parenthèses aux deux bouts forment-elles UNE paire englobant tout ?
///
/// "(1+2)" => oui ; "(1+2)*(3+4)" => non (la première se referme avant la fin).
pub fn enclosed_by_parens(tokens: &[String]) -> bool {
    match (tokens.first(), tokens.last()) {
        (Some(a), Some(b)) if a == "(" && b == ")" => {}
        _ => return false,
    }

    let mut depth: i32 = 0;
    for (i, t) in tokens.iter().enumerate() {
        match t.as_str() {
            "(" => depth += 1,
            ")" => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return i == tokens.len() - 1;
        }
    }
    false
}

/// Cherche le point de coupure : (index, opérateur).
///
/// Erreur de format si les parenthèses sont déséquilibrées ou s’il n’y a
/// aucun opérateur à profondeur 0.
pub fn branch(tokens: &[String]) -> Result<(usize, Op)> {
    let mut depth: i32 = 0;
    let mut point: Option<(usize, Op)> = None;

    for (i, t) in tokens.iter().enumerate() {
        match t.as_str() {
            "(" => depth += 1,
            ")" => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(CalcError::Format(format_tokens(tokens)));
        }
        if depth != 0 {
            continue;
        }

        if let Some(op) = Op::from_token(t) {
            // <= : le dernier de priorité minimale gagne
            if point.is_none_or(|(_, min)| op.priority() <= min.priority()) {
                point = Some((i, op));
            }
        }
    }

    if depth != 0 {
        return Err(CalcError::Format(format_tokens(tokens)));
    }
    point.ok_or_else(|| CalcError::Format(format_tokens(tokens)))
}

/// Construit l’arbre. `Ok(None)` seulement pour une suite vide.
pub fn build(tokens: &[String]) -> Result<Option<Node>> {
    if tokens.len() > MAX_JETONS {
        return Err(CalcError::Format(format!(
            "expression de {} jetons (max {MAX_JETONS})",
            tokens.len()
        )));
    }

    match tokens {
        [] => return Ok(None),
        [seul] => return Ok(Some(Node::Leaf(seul.clone()))),
        _ => {}
    }

    let mut t = tokens;
    while enclosed_by_parens(t) {
        t = &t[1..t.len() - 1];
    }
    match t {
        // "()" : groupe vide
        [] => return Err(CalcError::Format(format_tokens(tokens))),
        [seul] => return Ok(Some(Node::Leaf(seul.clone()))),
        _ => {}
    }

    let (point, op) = branch(t)?;

    // Un opérateur sans opérande d’un côté (ex: "1+", "2^-1") est rejeté
    // avec le symbole lui-même comme jeton fautif.
    let manque = || CalcError::Format(op.symbol().to_string());
    let left = build(&t[..point])?.ok_or_else(manque)?;
    let right = build(&t[point + 1..])?.ok_or_else(manque)?;

    Ok(Some(Node::Stem {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
