//! Near-miss probe generation for exactness checking
//!
//! A pattern that is wrong for a string set is almost always wrong on strings
//! that look like members: one character short, one too long, two members
//! spliced together. These are generated deterministically, topped up with
//! seeded random mutations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for near-miss generation
#[derive(Debug, Clone)]
pub struct NearMissConfig {
    /// Number of random mutations to add on top of the edge cases
    pub random_count: usize,
    /// Seed for the random mutations (None = random seed)
    pub seed: Option<u64>,
    /// Members considered when splicing pairs together
    pub max_crossover_members: usize,
}

impl Default for NearMissConfig {
    fn default() -> Self {
        NearMissConfig {
            random_count: 256,
            seed: None,
            max_crossover_members: 32,
        }
    }
}

impl NearMissConfig {
    pub fn with_random_count(mut self, count: usize) -> Self {
        self.random_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Characters mixed into mutations besides the ones found in the members
const EXTRA_CHARS: [char; 8] = ['a', 'Z', '0', '.', '|', '\n', 'é', '日'];

/// Generate edge-case probes derived from each member
pub fn generate_edge_case_probes<S: AsRef<str>>(members: &[S], max_crossover_members: usize) -> Vec<String> {
    let mut probes = vec![String::new()];

    for member in members {
        let member = member.as_ref();
        let chars: Vec<char> = member.chars().collect();

        // Extended at either end
        for c in ['x', '\n', 'é'] {
            probes.push(format!("{}{}", member, c));
            probes.push(format!("{}{}", c, member));
        }
        probes.push(member.repeat(2));

        if chars.is_empty() {
            continue;
        }

        // Truncated at either end
        probes.push(chars[1..].iter().collect());
        probes.push(chars[..chars.len() - 1].iter().collect());

        // Last character doubled, first character bumped to its neighbour
        probes.push(format!("{}{}", member, chars[chars.len() - 1]));
        let mut bumped = chars.clone();
        bumped[0] = next_char(bumped[0]);
        probes.push(bumped.into_iter().collect());
    }

    // Prefix of one member joined to the suffix of another
    let spliced: Vec<&str> = members
        .iter()
        .map(AsRef::as_ref)
        .take(max_crossover_members)
        .collect();
    for a in &spliced {
        for b in &spliced {
            if a == b {
                continue;
            }
            let a_mid = char_midpoint(a);
            let b_mid = char_midpoint(b);
            probes.push(format!("{}{}", &a[..a_mid], &b[b_mid..]));
            probes.push(format!("{}{}", a, b));
        }
    }

    probes
}

/// Generate `config.random_count` random single-edit mutations of members
pub fn generate_random_probes<S: AsRef<str>>(members: &[S], config: &NearMissConfig) -> Vec<String> {
    if members.is_empty() {
        return Vec::new();
    }

    let mut rng: ChaCha8Rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let mut alphabet: Vec<char> = members
        .iter()
        .flat_map(|m| m.as_ref().chars())
        .chain(EXTRA_CHARS)
        .collect();
    alphabet.sort_unstable();
    alphabet.dedup();

    let mut probes = Vec::with_capacity(config.random_count);
    for _ in 0..config.random_count {
        let member = members[rng.random_range(0..members.len())].as_ref();
        let mut chars: Vec<char> = member.chars().collect();
        let c = alphabet[rng.random_range(0..alphabet.len())];

        match rng.random_range(0..4) {
            // Insert
            0 => {
                let at = rng.random_range(0..=chars.len());
                chars.insert(at, c);
            }
            // Delete
            1 if !chars.is_empty() => {
                let at = rng.random_range(0..chars.len());
                chars.remove(at);
            }
            // Replace
            2 if !chars.is_empty() => {
                let at = rng.random_range(0..chars.len());
                chars[at] = c;
            }
            // Swap neighbours
            3 if chars.len() >= 2 => {
                let at = rng.random_range(0..chars.len() - 1);
                chars.swap(at, at + 1);
            }
            _ => chars.push(c),
        }

        probes.push(chars.into_iter().collect());
    }

    probes
}

/// Generate a sorted, deduplicated near-miss corpus that contains no member
pub fn generate_near_misses<S: AsRef<str>>(members: &[S], config: &NearMissConfig) -> Vec<String> {
    let mut probes = generate_edge_case_probes(members, config.max_crossover_members);
    probes.extend(generate_random_probes(members, config));

    let mut sorted_members: Vec<&str> = members.iter().map(AsRef::as_ref).collect();
    sorted_members.sort_unstable();

    probes.retain(|p| sorted_members.binary_search(&p.as_str()).is_err());
    probes.sort_unstable();
    probes.dedup();
    probes
}

fn next_char(c: char) -> char {
    char::from_u32(c as u32 + 1).unwrap_or('a')
}

/// Byte offset of the character boundary closest to the middle of `s`
fn char_midpoint(s: &str) -> usize {
    let mut mid = s.len() / 2;
    while !s.is_char_boundary(mid) {
        mid -= 1;
    }
    mid
}
