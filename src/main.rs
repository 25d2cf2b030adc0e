// src/main.rs
//
// Exercices fractions — point d'entrée (ligne de commande)
// --------------------------------------------------------
// Deux modes:
// - génération : -n <num> -r <range>            => Exercises.txt + Answers.txt
// - correction : -e <exercices> -a <réponses>   => Grade.txt
//
// IMPORTANT (structure projet):
// - La logique exacte vit dans src/noyau/ (aucune E/S)
// - src/app.rs : options + fichiers + aiguillage

use clap::Parser;

mod app;
mod noyau;

use app::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    app::run(&cli)
}
