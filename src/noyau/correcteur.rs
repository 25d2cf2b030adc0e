// src/noyau/correcteur.rs
//
// Correction d'une paire (énoncés, réponses) :
// - appariement par position, tronqué à la plus courte des deux listes
// - on retire "<i>." des deux lignes et le "=" final de l'énoncé
// - énoncé relu par l'analyseur puis évalué ; réponse lue par la grammaire des fractions
// - juste ssi les deux fractions sont égales
//
// Toute erreur (lecture, division par zéro, dépassement) => "faux" pour cette ligne, jamais fatal.

use std::fmt;

use log::debug;

use super::analyse::parse_expression;
use super::erreur::{ErreurNoyau, Resultat};
use super::format::parse_fraction;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradeReport {
    /// Numéros (à partir de 1) des réponses justes.
    pub correct: Vec<usize>,
    /// Numéros (à partir de 1) des réponses fausses.
    pub wrong: Vec<usize>,
}

impl GradeReport {
    pub fn correct_count(&self) -> usize {
        self.correct.len()
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong.len()
    }
}

fn join_indices(v: &[usize]) -> String {
    v.iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Les deux lignes de Grade.txt (sans saut de ligne final).
impl fmt::Display for GradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Correct: {} ({})",
            self.correct_count(),
            join_indices(&self.correct)
        )?;
        write!(
            f,
            "Wrong: {} ({})",
            self.wrong_count(),
            join_indices(&self.wrong)
        )
    }
}

/// Retire le numéro "<i>." en tête de ligne.
fn strip_label(line: &str) -> Resultat<&str> {
    line.split_once('.')
        .map(|(_, reste)| reste.trim())
        .ok_or_else(|| ErreurNoyau::MissingLabel(line.to_string()))
}

/// Verdict pour une paire de lignes.
pub fn grade_record(exercise: &str, answer: &str) -> Resultat<bool> {
    let enonce = strip_label(exercise)?;
    let enonce = enonce.strip_suffix('=').unwrap_or(enonce).trim();

    let attendu = parse_fraction(strip_label(answer)?)?;
    let calcule = parse_expression(enonce)?.eval()?;

    if calcule != attendu {
        debug!("`{enonce}` : attendu {attendu}, calculé {calcule}");
    }
    Ok(calcule == attendu)
}

pub fn grade_lines<A, B>(exercises: &[A], answers: &[B]) -> GradeReport
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut report = GradeReport::default();

    for (i, (e, a)) in exercises.iter().zip(answers).enumerate() {
        let index = i + 1;
        match grade_record(e.as_ref(), a.as_ref()) {
            Ok(true) => report.correct.push(index),
            Ok(false) => report.wrong.push(index),
            Err(err) => {
                debug!("ligne {index} illisible: {err}");
                report.wrong.push(index);
            }
        }
    }

    report
}
