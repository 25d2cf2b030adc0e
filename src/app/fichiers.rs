// src/app/fichiers.rs
//
// Fichiers produits / lus (glue, aucune logique de calcul).
// - Exercises.txt : "<i>. <infixe> ="
// - Answers.txt   : "<i>. <fraction>"
// - Grade.txt     : "Correct: ..." / "Wrong: ..."

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::noyau::{GenerationReport, GradeReport};

pub const EXERCISES_FILE: &str = "Exercises.txt";
pub const ANSWERS_FILE: &str = "Answers.txt";
pub const GRADE_FILE: &str = "Grade.txt";

/// Écrit les deux fichiers parallèles ; renvoie leurs chemins.
pub fn write_generation(dir: &Path, report: &GenerationReport) -> io::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;

    let ex_path = dir.join(EXERCISES_FILE);
    let ans_path = dir.join(ANSWERS_FILE);
    let mut ex = BufWriter::new(File::create(&ex_path)?);
    let mut ans = BufWriter::new(File::create(&ans_path)?);

    for p in &report.problems {
        writeln!(ex, "{}", p.exercise_line())?;
        writeln!(ans, "{}", p.answer_line())?;
    }

    ex.flush()?;
    ans.flush()?;
    Ok((ex_path, ans_path))
}

pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_owned)
        .collect())
}

pub fn write_grade(dir: &Path, report: &GradeReport) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(GRADE_FILE);
    fs::write(&path, format!("{report}\n"))?;
    Ok(path)
}
