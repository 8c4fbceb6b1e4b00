use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::error::Error;
use super::types::EdgeSource;
use common::types::{Edge, Vertex, Weight};

/// Produces a random directed graph.
///
/// Endpoints are drawn uniformly from `1..=vertices` and weights from
/// `min_weight..=max_weight`. A fixed `seed` makes the output reproducible.
/// Negative weights may well produce negative cycles.
#[derive(Debug, Clone)]
pub struct RandomEdgeSource {
    pub vertices: Vertex,
    pub edges: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
    pub seed: Option<u64>,
}

impl RandomEdgeSource {
    fn validate(&self) -> Result<(), Error> {
        if self.vertices == 0 {
            return Err(Error::InvalidArgument(
                "vertex count must be positive".to_string(),
            ));
        }
        if self.edges == 0 {
            return Err(Error::InvalidArgument(
                "edge count must be positive".to_string(),
            ));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidArgument(format!(
                "min weight {} exceeds max weight {}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

impl EdgeSource for RandomEdgeSource {
    fn load_edges(self) -> Result<Vec<Edge>, Error> {
        self.validate()?;

        let mut rng: SmallRng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let vertex_range = 1..=self.vertices;
        let weight_range = self.min_weight..=self.max_weight;

        let edges: Vec<Edge> = (0..self.edges)
            .map(|_| {
                let from = rng.random_range(vertex_range.clone());
                let to = rng.random_range(vertex_range.clone());
                let weight = rng.random_range(weight_range.clone());

                (from, to, weight)
            })
            .collect();

        info!(
            "Generated {} edges over {} vertices",
            edges.len(),
            self.vertices
        );
        Ok(edges)
    }
}
