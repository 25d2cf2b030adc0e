// src/noyau/canon.rs
//
// Forme canonique (texte) pour la déduplication :
// - chaque sous-arbre entièrement parenthésé : "(L op R)"
// - opérateur commutatif (+ *) : on garde le plus petit (ordre lexicographique)
//   entre "(L op R)" et "(R op L)"
// - `-` et `/` : ordre conservé, jamais échangé
//
// Seule la commutation au nœud est absorbée ; l'associativité ne l'est pas
// ((1 + 2) + 3 et 1 + (2 + 3) restent deux problèmes distincts).

use super::expr::Expr;

pub fn canon_string(e: &Expr) -> String {
    match e {
        Expr::Leaf(v) => v.to_string(),
        Expr::Binary(op, a, b) => {
            let ca = canon_string(a);
            let cb = canon_string(b);
            let direct = format!("({ca} {op} {cb})");

            if !op.is_commutative() {
                return direct;
            }
            let inverse = format!("({cb} {op} {ca})");
            direct.min(inverse)
        }
    }
}
