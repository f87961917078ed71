//! `structure-optimization`: multi-objective genetic algorithm.

use minijinja::context;
use molgen_types::{
    AlgorithmCategory, GeneratedAlgorithm, OptimizationParameters, ParameterInput,
    ResolvedParameters,
};

use super::{count_or, owned};
use crate::catalog;
use crate::error::GenerateError;
use crate::templates::PseudocodeTemplates;

/// Generation count used when `iterations` is absent.
pub const DEFAULT_GENERATIONS: u64 = 1000;

const POPULATION_SIZE: u32 = 100;
const MUTATION_RATE: f64 = 0.1;
const CROSSOVER_RATE: f64 = 0.8;

const OBJECTIVES: [&str; 4] = [
    "potency",
    "selectivity",
    "admet",
    "synthetic_accessibility",
];

const DESCRIPTION: &str = "Evolves a population of candidate molecules with fragment-based crossover \
and structural mutations, ranks them by non-dominated sorting over several objectives with crowding \
distance for diversity, and returns the final Pareto front of optimized structures.";

const COMPLEXITY: &str = "O(g * p^2 * k) for g generations, population size p and k objectives (non-dominated sort dominates)";

const USE_CASES: [&str; 4] = [
    "Multi-parameter lead optimization",
    "De novo design around a scaffold",
    "Balancing potency against ADMET liabilities",
    "Exploring synthetically accessible chemical space",
];

/// Build the `structure-optimization` algorithm description.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFailure`] if the template fails to render.
pub fn generate(
    params: &ParameterInput,
    templates: &PseudocodeTemplates,
) -> Result<GeneratedAlgorithm, GenerateError> {
    let pseudocode = templates.render(AlgorithmCategory::StructureOptimization, context! {})?;

    Ok(GeneratedAlgorithm {
        name: catalog::display_name(AlgorithmCategory::StructureOptimization).to_owned(),
        category: AlgorithmCategory::StructureOptimization,
        description: DESCRIPTION.to_owned(),
        parameters: ResolvedParameters::Optimization(OptimizationParameters {
            population_size: POPULATION_SIZE,
            generations: count_or(params.iterations.as_ref(), DEFAULT_GENERATIONS),
            mutation_rate: MUTATION_RATE,
            crossover_rate: CROSSOVER_RATE,
            objectives: owned(&OBJECTIVES),
        }),
        pseudocode,
        complexity: COMPLEXITY.to_owned(),
        use_cases: owned(&USE_CASES),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Number, json};

    use super::*;

    #[test]
    fn defaults_are_complete() {
        let Ok(templates) = PseudocodeTemplates::new() else { panic!("templates") };
        let Ok(algorithm) = generate(&ParameterInput::default(), &templates) else { panic!() };
        let Ok(parameters) = serde_json::to_value(&algorithm.parameters) else { panic!() };
        assert_eq!(
            parameters,
            json!({
                "populationSize": 100,
                "generations": 1000,
                "mutationRate": 0.1,
                "crossoverRate": 0.8,
                "objectives": ["potency", "selectivity", "admet", "synthetic_accessibility"],
            })
        );
    }

    #[test]
    fn iterations_map_to_generations() {
        let Ok(templates) = PseudocodeTemplates::new() else { panic!("templates") };
        let input = ParameterInput {
            iterations: Some(Number::from(42)),
            ..ParameterInput::default()
        };
        let Ok(algorithm) = generate(&input, &templates) else { panic!() };
        let ResolvedParameters::Optimization(p) = &algorithm.parameters else { panic!() };
        assert_eq!(p.generations, Number::from(42));
        assert_eq!(p.population_size, 100);
        assert_eq!(p.objectives.len(), 4);
    }
}
