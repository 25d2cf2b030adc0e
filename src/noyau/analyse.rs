// src/noyau/analyse.rs
//
// Descente récursive : texte infixe -> Expr (inverse de Expr::to_infix).
//
// Grammaire :
//   Expr := Term (('+' | '-') Term)*
//   Term := Atom (('*' | '/') Atom)*
//   Atom := '(' Expr ')' | Nombre
//
// Les deux niveaux sont itératifs et associatifs à gauche : 8 / 2 / 2 = (8 / 2) / 2.
// L'arbre relu n'a pas forcément la forme de l'arbre imprimé ; seule la valeur compte.

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::{Expr, Op};
use super::jetons::{tokenize, Jeton, Tok};

/// Lit une expression complète ; tout jeton restant est une erreur.
pub fn parse_expression(s: &str) -> Resultat<Expr> {
    let jetons = tokenize(s)?;
    let mut p = Analyseur {
        jetons: &jetons,
        i: 0,
        fin: s.chars().count(),
    };

    let e = p.expr()?;
    if let Some(j) = p.peek() {
        return Err(ErreurNoyau::TrailingInput { pos: j.pos });
    }
    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    fin: usize, // position de fin du texte (pour les erreurs)
}

impl<'a> Analyseur<'a> {
    fn peek(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.i)
    }

    /// Opérateur suivant s'il est du niveau demandé (1 : + -, 2 : * /).
    fn peek_op(&self, niveau: u8) -> Option<Op> {
        self.peek()
            .and_then(|j| j.tok.as_op())
            .filter(|op| op.precedence() == niveau)
    }

    fn expr(&mut self) -> Resultat<Expr> {
        let mut e = self.term()?;
        while let Some(op) = self.peek_op(1) {
            self.i += 1;
            let droite = self.term()?;
            e = Expr::binary(op, e, droite);
        }
        Ok(e)
    }

    fn term(&mut self) -> Resultat<Expr> {
        let mut e = self.atom()?;
        while let Some(op) = self.peek_op(2) {
            self.i += 1;
            let droite = self.atom()?;
            e = Expr::binary(op, e, droite);
        }
        Ok(e)
    }

    fn atom(&mut self) -> Resultat<Expr> {
        let j = self.peek().ok_or(ErreurNoyau::UnexpectedEnd)?;

        match &j.tok {
            Tok::Num(v) => {
                let v = *v;
                self.i += 1;
                Ok(Expr::leaf(v))
            }
            Tok::LPar => {
                self.i += 1;
                let e = self.expr()?;
                match self.peek() {
                    Some(Jeton { tok: Tok::RPar, .. }) => {
                        self.i += 1;
                        Ok(e)
                    }
                    Some(j) => Err(ErreurNoyau::MissingCloseParen { pos: j.pos }),
                    None => Err(ErreurNoyau::MissingCloseParen { pos: self.fin }),
                }
            }
            _ => Err(ErreurNoyau::ExpectedNumber { pos: j.pos }),
        }
    }
}
