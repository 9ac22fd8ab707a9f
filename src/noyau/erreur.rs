//! Erreurs du noyau.
//!
//! Deux familles seulement (+ entrée vide) : le pipeline n’a pas de succès
//! partiel, une évaluation réussit entièrement ou échoue avec UNE erreur.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Littéral invalide ou structure de jetons irréductible.
    #[error("'{0}' is invalid format.")]
    Format(String),

    /// Opérateur appliqué hors de son domaine (÷0, exposant négatif…).
    #[error("hors domaine : {0}")]
    Domain(String),

    /// Entrée vide ou blanche arrivée jusqu’au noyau.
    #[error("Entrée vide")]
    Empty,
}

impl CalcError {
    pub fn is_format(&self) -> bool {
        matches!(self, CalcError::Format(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, CalcError::Domain(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
