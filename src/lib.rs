//! Calculatrice entière : évaluation d’expressions `+ - * / ^` sur des entiers
//! de taille arbitraire, avec préfixes de base (0x, 0o, 0b) et unités binaires
//! (K, M, G, T).
//!
//! ```
//! use calculatrice_entiere::noyau::execute;
//!
//! assert_eq!(execute("(1+2)*0x10").unwrap().to_string(), "48");
//! assert_eq!(execute("2^10 - 1K").unwrap().to_string(), "0");
//! ```

pub mod noyau;
