// src/app.rs
//
// Exercices fractions — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + fichiers.rs)
// - Ré-exporter Cli (pour main.rs: use crate::app::Cli;)
// - Aiguiller vers la génération ou la correction
//
// Le calcul vit dans le noyau ; ici seulement lecture/écriture + messages.

pub mod etat;
pub mod fichiers;

pub use etat::{Cli, Mode};

use color_eyre::eyre::{eyre, Result, WrapErr};
use log::info;

use crate::noyau::{grade_lines, ProblemGenerator};

pub fn run(cli: &Cli) -> Result<()> {
    match cli.mode() {
        Some(Mode::Generate { count, range }) => generer(cli, count, range),
        Some(Mode::Grade { exercises, answers }) => corriger(cli, &exercises, &answers),
        // clap l'interdit déjà ; on reste explicite
        None => Err(eyre!(
            "usage: -n <num> -r <range>  |  -e <exercises.txt> -a <answers.txt>"
        )),
    }
}

fn generer(cli: &Cli, count: usize, range: u32) -> Result<()> {
    let config = cli.generator_config(count, range);
    let report = ProblemGenerator::seeded(config, cli.seed).generate();

    let (ex_path, ans_path) = fichiers::write_generation(&cli.out_dir, &report)
        .wrap_err_with(|| format!("écriture impossible dans {}", cli.out_dir.display()))?;

    info!(
        "{} problèmes générés dans {} et {}",
        report.generated(),
        ex_path.display(),
        ans_path.display()
    );
    Ok(())
}

fn corriger(cli: &Cli, exercises: &std::path::Path, answers: &std::path::Path) -> Result<()> {
    let exercices = fichiers::read_lines(exercises)
        .wrap_err_with(|| format!("lecture impossible: {}", exercises.display()))?;
    let reponses = fichiers::read_lines(answers)
        .wrap_err_with(|| format!("lecture impossible: {}", answers.display()))?;

    let note = grade_lines(&exercices, &reponses);

    let path = fichiers::write_grade(&cli.out_dir, &note)
        .wrap_err_with(|| format!("écriture impossible dans {}", cli.out_dir.display()))?;

    info!(
        "{} justes, {} fausses -> {}",
        note.correct_count(),
        note.wrong_count(),
        path.display()
    );
    Ok(())
}
