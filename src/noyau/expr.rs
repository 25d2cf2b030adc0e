// src/noyau/expr.rs
//
// Arbre d'expression exact.
// - Leaf   : une Fraction
// - Binary : un opérateur (+ - * /) et deux sous-arbres possédés (pas de partage)
//
// Construit une fois (générateur ou lecture), jamais modifié ensuite.
// Chaque opération (eval / validité / canon / infixe) est une récursion structurelle.
//
// Validité (vérifiée de bas en haut, fonction pure des valeurs) :
// - `-` : gauche >= droite (aucun résultat intermédiaire négatif)
// - `/` : diviseur non nul ET quotient NON entier
// - `+`, `*` : toujours valides si les enfants le sont

use std::fmt;

use super::canon::canon_string;
use super::erreur::Resultat;
use super::fraction::Fraction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Symbole imprimé (ASCII, relu par l'analyseur).
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    pub fn apply(self, a: &Fraction, b: &Fraction) -> Resultat<Fraction> {
        match self {
            Op::Add => a.checked_add(b),
            Op::Sub => a.checked_sub(b),
            Op::Mul => a.checked_mul(b),
            Op::Div => a.checked_div(b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Leaf(Fraction),
    Binary(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn leaf(value: Fraction) -> Expr {
        Expr::Leaf(value)
    }

    pub fn binary(op: Op, left: Expr, right: Expr) -> Expr {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    /// Valeur exacte ; DivisionByZero / Overflow remontent tels quels.
    pub fn eval(&self) -> Resultat<Fraction> {
        match self {
            Expr::Leaf(v) => Ok(*v),
            Expr::Binary(op, a, b) => {
                let a = a.eval()?;
                let b = b.eval()?;
                op.apply(&a, &b)
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valeur_si_valide().is_some()
    }

    /// Un seul parcours : la valeur du sous-arbre s'il est valide, sinon None.
    /// Une erreur d'évaluation (dépassement...) rend le sous-arbre invalide.
    fn valeur_si_valide(&self) -> Option<Fraction> {
        match self {
            Expr::Leaf(v) => Some(*v),
            Expr::Binary(op, a, b) => {
                let a = a.valeur_si_valide()?;
                let b = b.valeur_si_valide()?;
                match op {
                    Op::Sub if a < b => None,
                    Op::Div => {
                        let q = a.checked_div(&b).ok()?;
                        (!q.is_integer()).then_some(q)
                    }
                    _ => op.apply(&a, &b).ok(),
                }
            }
        }
    }

    /// Forme canonique (clé de déduplication sous commutativité).
    pub fn canonical(&self) -> String {
        canon_string(self)
    }

    /// Notation infixe minimale, relisible par `analyse::parse_expression`.
    pub fn to_infix(&self) -> String {
        let mut out = String::new();
        self.write_infix(0, false, &mut out);
        out
    }

    /// Parenthèses ssi précédence < parent, ou égale au parent en position de fils droit
    /// (parent associatif à gauche : a - (b - c) ≠ a - b - c).
    pub fn write_infix(&self, parent_prec: u8, is_right_child: bool, out: &mut String) {
        match self {
            Expr::Leaf(v) => out.push_str(&v.to_string()),
            Expr::Binary(op, a, b) => {
                let prec = op.precedence();
                let parens = prec < parent_prec || (prec == parent_prec && is_right_child);

                if parens {
                    out.push('(');
                }
                a.write_infix(prec, false, out);
                out.push(' ');
                out.push(op.symbol());
                out.push(' ');
                b.write_infix(prec, true, out);
                if parens {
                    out.push(')');
                }
            }
        }
    }

    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Leaf(_) => 0,
            Expr::Binary(_, a, b) => 1 + a.operator_count() + b.operator_count(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_infix())
    }
}
