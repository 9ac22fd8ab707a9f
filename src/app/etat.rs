//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du formulaire (entrée, résultat, erreur, démarche)
//! et l’action “soumettre” : lire l’entrée, appeler le noyau, écrire le résultat.
//!
//! Contrats :
//! - Entrée vide ou blanche : rien ne se passe (le noyau n’est pas appelé).
//! - Échec du noyau : résultat = "NaN" + message, jamais de panique.
//! - Succès : résultat en décimal.

use calculatrice_entiere::noyau::{eval_expression, CalcError, DemarcheNoyau};

/// Affiché à la place du résultat quand l’évaluation échoue.
pub const RESULTAT_ECHEC: &str = "NaN";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // décimal, ou "NaN"
    pub erreur: String,   // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Échec : "NaN" + message ; la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, e: &CalcError) {
        log::warn!("évaluation échouée pour {:?}: {e}", self.entree);
        self.resultat = RESULTAT_ECHEC.to_string();
        self.erreur = e.to_string();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Soumission du formulaire (Enter ou "=").
    pub fn soumettre(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            return;
        }

        match eval_expression(s) {
            Ok((valeur, d)) => self.set_resultat(valeur.to_string(), d),
            Err(e) => self.set_erreur(&e),
        }
    }
}
