// src/noyau/generateur.rs
//
// Générateur de problèmes :
// - réservoir de feuilles (naturels, fractions propres, nombres mixtes) tiré uniformément
// - arbre aléatoire sous budget d'opérateurs (3 au plus)
// - acceptation : arbre valide ET forme canonique encore jamais vue
// - boucle bornée : si le budget d'essais s'épuise, on rend ce qu'on a (manque signalé, pas d'erreur)
//
// Le RNG appartient au générateur (pas d'état global) : graine fixe => sortie reproductible.

use std::collections::HashSet;

use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::expr::{Expr, Op};
use super::fraction::Fraction;

/// Nombre maximal d'opérateurs par arbre.
pub const MAX_OPERATORS: u32 = 3;

/// Probabilité de couper en feuille avant l'épuisement du budget.
pub const LEAF_PROBABILITY: f64 = 0.4;

/// Budget d'essais par défaut (rejet borné).
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Garde-fou : borne r (le réservoir croît en r³).
pub const MAX_RANGE: u32 = 10_000;

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub count: usize,
    pub range: u32,
    pub max_operators: u32,
    pub max_attempts: u64,
    pub leaf_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            range: 10,
            max_operators: MAX_OPERATORS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            leaf_probability: LEAF_PROBABILITY,
        }
    }
}

impl GeneratorConfig {
    pub fn new(count: usize, range: u32) -> Self {
        Self {
            count,
            range,
            ..Self::default()
        }
    }
}

/* ------------------------ Réservoir de feuilles ------------------------ */

/// Réservoir des valeurs de feuilles pour une borne r, dans l'ordre :
/// - naturels 0..r
/// - fractions propres n/d, d dans [2, r], n dans [1, d)
/// - nombres mixtes w'n/d, w dans [1, r), n/d propre
///
/// Représenté par sa taille et un accès par indice : rien n'est matérialisé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafPool {
    range: u64,
    proper: u64, // nombre de fractions propres : r(r-1)/2
}

impl LeafPool {
    pub fn new(range: u32) -> Self {
        let r = u64::from(range.min(MAX_RANGE));
        let proper = if r >= 2 { r * (r - 1) / 2 } else { 0 };
        Self { range: r, proper }
    }

    pub fn len(&self) -> u64 {
        // naturels + propres + (r - 1) * propres
        self.range + self.range * self.proper
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, i: u64) -> Option<Fraction> {
        if i >= self.len() {
            return None;
        }
        if i < self.range {
            return i64::try_from(i).ok().map(Fraction::from_integer);
        }

        let i = i - self.range;
        let (entier, k) = if i < self.proper {
            (0, i)
        } else {
            let j = i - self.proper;
            (1 + j / self.proper, j % self.proper)
        };

        let (n, d) = self.proper_at(k);
        let numer = i64::try_from(entier * d + n).ok()?;
        let denom = i64::try_from(d).ok()?;
        Fraction::new(numer, denom).ok()
    }

    /// k-ième fraction propre (dénominateur croissant, puis numérateur).
    fn proper_at(&self, mut k: u64) -> (u64, u64) {
        let mut d = 2;
        while k >= d - 1 {
            k -= d - 1;
            d += 1;
        }
        (k + 1, d)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<Fraction> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.random_range(0..self.len()))
    }
}

/* ------------------------ Problèmes ------------------------ */

#[derive(Clone, Debug)]
pub struct Problem {
    /// Numéro (à partir de 1).
    pub index: usize,
    pub expr: Expr,
    pub canonical: String,
    pub answer: Fraction,
}

impl Problem {
    /// "<i>. <infixe> ="
    pub fn exercise_line(&self) -> String {
        format!("{}. {} =", self.index, self.expr)
    }

    /// "<i>. <fraction>"
    pub fn answer_line(&self) -> String {
        format!("{}. {}", self.index, self.answer)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GenerationReport {
    pub problems: Vec<Problem>,
    pub requested: usize,
    pub attempts: u64,
}

impl GenerationReport {
    pub fn generated(&self) -> usize {
        self.problems.len()
    }

    pub fn is_shortfall(&self) -> bool {
        self.generated() < self.requested
    }

    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.generated())
    }
}

/* ------------------------ Générateur ------------------------ */

pub struct ProblemGenerator<R: Rng> {
    config: GeneratorConfig,
    pool: LeafPool,
    rng: R,
}

impl ProblemGenerator<ChaCha8Rng> {
    /// Graine fixe si fournie, sinon graine système.
    pub fn seeded(config: GeneratorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(mut config: GeneratorConfig, rng: R) -> Self {
        config.leaf_probability = config.leaf_probability.clamp(0.0, 1.0);
        let pool = LeafPool::new(config.range);
        Self { config, pool, rng }
    }

    /// Arbre aléatoire avec `rem` opérateurs au plus.
    /// None seulement si le réservoir est vide.
    pub fn build_tree(&mut self, rem: u32) -> Option<Expr> {
        if rem == 0 || self.rng.random_bool(self.config.leaf_probability) {
            return self.pool.sample(&mut self.rng).map(Expr::leaf);
        }

        let op = Op::ALL[self.rng.random_range(0..Op::ALL.len())];
        let rem_gauche = self.rng.random_range(0..rem);
        let rem_droite = rem - 1 - rem_gauche;

        let gauche = self.build_tree(rem_gauche)?;
        let droite = self.build_tree(rem_droite)?;
        Some(Expr::binary(op, gauche, droite))
    }

    pub fn generate(&mut self) -> GenerationReport {
        let requested = self.config.count;
        let mut report = GenerationReport {
            requested,
            ..GenerationReport::default()
        };

        debug!(
            "réservoir: {} feuilles (r = {})",
            self.pool.len(),
            self.config.range
        );

        let mut vus: HashSet<String> = HashSet::new();

        while report.problems.len() < requested && report.attempts < self.config.max_attempts {
            report.attempts += 1;

            let Some(expr) = self.build_tree(self.config.max_operators) else {
                break; // réservoir vide
            };
            if !expr.is_valid() {
                continue;
            }
            // valide => évaluable ; une erreur jette quand même le candidat
            let Ok(answer) = expr.eval() else {
                continue;
            };

            let canonical = expr.canonical();
            if !vus.insert(canonical.clone()) {
                continue;
            }

            report.problems.push(Problem {
                index: report.problems.len() + 1,
                expr,
                canonical,
                answer,
            });
        }

        debug!(
            "{} problèmes acceptés en {} essais",
            report.generated(),
            report.attempts
        );
        if report.is_shortfall() {
            warn!(
                "seulement {} problèmes uniques générés (demandés : {}, manquants : {})",
                report.generated(),
                requested,
                report.shortfall()
            );
        }

        report
    }
}
