// src/noyau/erreur.rs
//
// Erreurs du noyau exact.
// - arithmétique : division par zéro, dépassement i64
// - lecture      : nombre mal formé, fin inattendue, parenthèse manquante, numéro absent
//
// Aucune n'est fatale : la génération jette le candidat, la correction compte "faux".

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    #[error("nombre mal formé: `{0}`")]
    MalformedNumber(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("dépassement de capacité (entiers 64 bits)")]
    Overflow,

    #[error("fin d'expression inattendue")]
    UnexpectedEnd,

    #[error("`)` manquante (position {pos})")]
    MissingCloseParen { pos: usize },

    #[error("nombre attendu (position {pos})")]
    ExpectedNumber { pos: usize },

    #[error("texte en trop après l'expression (position {pos})")]
    TrailingInput { pos: usize },

    #[error("numéro `<i>.` absent: `{0}`")]
    MissingLabel(String),
}

pub type Resultat<T> = Result<T, ErreurNoyau>;
