//! src/app/etat.rs
//!
//! État de la ligne de commande (sans noyau, sans fichiers).
//!
//! Rôle : décrire les options, décider du mode (génération / correction)
//! et fournir la configuration du générateur.
//!
//! Contrats :
//! - Aucune évaluation ici.
//! - Les deux fichiers -e/-a présents => correction (prioritaire).
//! - Sinon -r est obligatoire (clap signale l'erreur d'usage).
//! - Garde-fou : r borné par MAX_RANGE.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use crate::noyau::generateur::{DEFAULT_MAX_ATTEMPTS, MAX_RANGE};
use crate::noyau::GeneratorConfig;

/// Nombre de problèmes par défaut.
const COUNT_DEFAUT: usize = 10;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Génère des exercices d'arithmétique sur fractions, ou corrige un fichier de réponses."
)]
pub struct Cli {
    /// Nombre de problèmes à générer.
    #[arg(short = 'n', value_name = "INT", default_value_t = COUNT_DEFAUT)]
    pub count: usize,

    /// Borne des valeurs : naturels < r, dénominateurs <= r.
    #[arg(
        short = 'r',
        value_name = "INT",
        value_parser = clap::value_parser!(u32).range(1..=MAX_RANGE as i64),
        required_unless_present_all = ["exercises", "answers"]
    )]
    pub range: Option<u32>,

    /// Fichier d'énoncés à corriger.
    #[arg(short = 'e', value_name = "FILE", requires = "answers")]
    pub exercises: Option<PathBuf>,

    /// Fichier de réponses à corriger.
    #[arg(short = 'a', value_name = "FILE", requires = "exercises")]
    pub answers: Option<PathBuf>,

    /// Graine du tirage (sortie reproductible).
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Budget d'essais de la génération.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u64,

    /// Dossier des fichiers produits.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Journal détaillé.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Generate { count: usize, range: u32 },
    Grade { exercises: PathBuf, answers: PathBuf },
}

impl Cli {
    pub fn mode(&self) -> Option<Mode> {
        if let (Some(exercises), Some(answers)) = (&self.exercises, &self.answers) {
            return Some(Mode::Grade {
                exercises: exercises.clone(),
                answers: answers.clone(),
            });
        }
        self.range.map(|range| Mode::Generate {
            count: self.count,
            range,
        })
    }

    pub fn generator_config(&self, count: usize, range: u32) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts: self.max_attempts,
            ..GeneratorConfig::new(count, range)
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("exercices").chain(args.iter().copied()))
    }

    #[test]
    fn definition_coherente() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_generation() {
        let cli = parse(&["-n", "5", "-r", "10"]).unwrap();
        assert_eq!(cli.mode(), Some(Mode::Generate { count: 5, range: 10 }));
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn nombre_par_defaut() {
        let cli = parse(&["-r", "4", "--seed", "7", "-v"]).unwrap();
        assert_eq!(cli.mode(), Some(Mode::Generate { count: 10, range: 4 }));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn mode_correction_prioritaire() {
        let cli = parse(&["-e", "ex.txt", "-a", "ans.txt", "-r", "10"]).unwrap();
        assert_eq!(
            cli.mode(),
            Some(Mode::Grade {
                exercises: "ex.txt".into(),
                answers: "ans.txt".into(),
            })
        );
    }

    #[test]
    fn erreurs_d_usage() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-n", "5"]).is_err());
        assert!(parse(&["-r", "0"]).is_err());
        assert!(parse(&["-r", "10001"]).is_err());
        assert!(parse(&["-e", "ex.txt"]).is_err());
    }

    #[test]
    fn configuration_du_generateur() {
        let cli = parse(&["-r", "6", "--max-attempts", "500"]).unwrap();
        let config = cli.generator_config(3, 6);
        assert_eq!(config.count, 3);
        assert_eq!(config.range, 6);
        assert_eq!(config.max_attempts, 500);
        assert_eq!(config.max_operators, 3);
    }
}
