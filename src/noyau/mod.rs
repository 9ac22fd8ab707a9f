//! Noyau entier (big int)
//!
//! Organisation interne :
//! - erreur.rs    : CalcError (format / domaine / vide)
//! - jetons.rs    : tokenisation (espaces autour des opérateurs)
//! - litteral.rs  : décodage 0x/0o/0b + unités K/M/G/T
//! - operateur.rs : + - * / ^ (priorité + calcul)
//! - arbre.rs     : découpage récursif -> arbre binaire
//! - eval.rs      : pipeline complet

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod litteral;
pub mod operateur;

#[cfg(test)]
mod tests_campagne;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{eval_expression, execute, DemarcheNoyau};
