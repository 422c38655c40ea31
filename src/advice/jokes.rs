//! The joke path.

/// Share of triggers answered with a joke instead of a fetch.
pub const DEFAULT_JOKE_PROBABILITY: f64 = 0.10;

pub fn default_jokes() -> Vec<String> {
    [
        "What cheese can be used to hide a horse? Mascarpone.",
        "What do you call cheese that isn't yours? Nacho cheese.",
        "Why did the cheese refuse to be sliced? It had grater plans.",
        "What cheese is made backwards? Edam.",
        "How do you handle dangerous cheese? Caerphilly.",
        "What did the cheese say when it looked in the mirror? Halloumi!",
        "Which cheese helps you get through tough times? Brie-silience.",
        "What cheese do you use to coax a bear out of a cave? Camembert.",
        "Why do cheese puns never get old? Because they're aged to perfection.",
        "What is a ghost's favourite cheese? Boo-rsin.",
    ]
    .iter()
    .map(|joke| joke.to_string())
    .collect()
}

/// Fixed ordered joke list plus the draw threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct JokeBook {
    jokes: Vec<String>,
    probability: f64,
}

impl Default for JokeBook {
    fn default() -> Self {
        Self::new(default_jokes(), DEFAULT_JOKE_PROBABILITY)
    }
}

impl JokeBook {
    /// `probability` is clamped to `[0, 1]`.
    pub fn new(jokes: Vec<String>, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { jokes, probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn jokes(&self) -> &[String] {
        &self.jokes
    }

    /// Index selected by draw `r`, or `None` when `r` takes the fetch path.
    ///
    /// `index = floor(r / probability * len)`, clamped to the last joke.
    pub fn select_index(&self, r: f64) -> Option<usize> {
        if self.jokes.is_empty() || r.is_nan() || r >= self.probability {
            return None;
        }
        let scaled = (r / self.probability * self.jokes.len() as f64).floor();
        let index = if scaled < 0.0 { 0 } else { scaled as usize };
        Some(index.min(self.jokes.len() - 1))
    }

    pub fn draw(&self, r: f64) -> Option<&str> {
        self.select_index(r).map(|index| self.jokes[index].as_str())
    }
}
