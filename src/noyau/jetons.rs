// src/noyau/jetons.rs
//
// Découpage en jetons de la notation infixe imprimée par Expr::to_infix.
//
// Règles :
// - espaces ignorés entre jetons
// - opérateurs : + - * /   (× et ÷ acceptés comme alias)
// - parenthèses ( )
// - littéral : plus longue suite de caractères hors espace / parenthèse / opérateur,
//   lue par la grammaire des fractions ("7", "3/4", "2'3/4")
// - `/` collé entre deux chiffres (sans espace) fait partie du littéral : "3/4" est UN nombre,
//   "3 / 4" est une division. L'imprimeur entoure toujours ses opérateurs d'espaces.

use super::erreur::Resultat;
use super::expr::Op;
use super::format::parse_fraction;
use super::fraction::Fraction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Fraction),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur binaire porté par le jeton, s'il y en a un.
    pub fn as_op(&self) -> Option<Op> {
        match self {
            Tok::Plus => Some(Op::Add),
            Tok::Minus => Some(Op::Sub),
            Tok::Star => Some(Op::Mul),
            Tok::Slash => Some(Op::Div),
            _ => None,
        }
    }
}

/// Jeton + position (en caractères) dans le texte source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

fn operateur(c: char) -> Option<Tok> {
    match c {
        '+' => Some(Tok::Plus),
        '-' => Some(Tok::Minus),
        '*' | '×' => Some(Tok::Star),
        '/' | '÷' => Some(Tok::Slash),
        _ => None,
    }
}

fn est_delimiteur(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || operateur(c).is_some()
}

pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' || c == ')' {
            let tok = if c == '(' { Tok::LPar } else { Tok::RPar };
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        if let Some(tok) = operateur(c) {
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        // Littéral
        let start = i;
        while i < chars.len() {
            let c = chars[i];
            if c == '/' {
                // barre de fraction : chiffre juste avant ET juste après
                let colle = i > start
                    && chars[i - 1].is_ascii_digit()
                    && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());
                if !colle {
                    break;
                }
            } else if est_delimiteur(c) {
                break;
            }
            i += 1;
        }

        let texte: String = chars[start..i].iter().collect();
        out.push(Jeton {
            tok: Tok::Num(parse_fraction(&texte)?),
            pos: start,
        });
    }

    Ok(out)
}
