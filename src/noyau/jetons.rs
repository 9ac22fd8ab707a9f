// src/noyau/jetons.rs

use super::operateur::Op;

/// Caractères qui forment toujours un jeton à eux seuls.
const PARENTHESES: [char; 2] = ['(', ')'];

/// Tokenize une chaîne en jetons.
///
/// Principe : on entoure d’espaces chaque opérateur (+ - * / ^) et chaque
/// parenthèse, puis on découpe sur les blancs.
/// Aucune validation ici : tout fragment restant (même “12a” ou “0xzz”)
/// devient un jeton littéral, vérifié plus tard par `litteral::decode`.
pub fn tokenize(s: &str) -> Vec<String> {
    let mut espace = String::with_capacity(s.len() * 2);

    for c in s.chars() {
        if Op::from_char(c).is_some() || PARENTHESES.contains(&c) {
            espace.push(' ');
            espace.push(c);
            espace.push(' ');
        } else {
            espace.push(c);
        }
    }

    let out: Vec<String> = espace.split_whitespace().map(str::to_owned).collect();
    log::debug!("jetons: {out:?}");
    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
