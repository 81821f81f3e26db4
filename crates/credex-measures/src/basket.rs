//! Baskets of weighted components, valued by roll-up.

use credex_core::{MeasureMap, PolicyTable};
use credex_traits::{BasketComponent, ValuationError, Valuer};
use tracing::warn;

use crate::rollup::{rollup_values, ComponentValues};
use crate::weights::component_weights;

/// A basket of named components.
///
/// The basket is itself a [`Valuer`]: under any scenario input it values each
/// component and rolls the results up with its [`PolicyTable`]. A component
/// that cannot be valued contributes nothing; when no component can be valued
/// the basket is not computable either. Basket values carry no `CalcTime`.
#[derive(Debug, Clone)]
pub struct Basket<C> {
    components: Vec<C>,
    policies: PolicyTable,
}

impl<C> Basket<C> {
    /// Creates a basket whose measures all aggregate cumulatively.
    #[must_use]
    pub fn new(components: Vec<C>) -> Self {
        Self {
            components,
            policies: PolicyTable::default(),
        }
    }

    /// Sets the per-measure aggregation policies.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    /// Returns the components.
    #[must_use]
    pub fn components(&self) -> &[C] {
        &self.components
    }

    /// Returns the aggregation policies.
    #[must_use]
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }
}

impl<C: BasketComponent> Basket<C> {
    /// Returns the component names, in component order.
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Returns the notional weights, or `None` if the total notional is zero.
    #[must_use]
    pub fn weights(&self) -> Option<Vec<f64>> {
        let notionals: Vec<f64> = self.components.iter().map(|c| c.initial_notional()).collect();
        component_weights(&notionals)
    }
}

impl<S, C> Valuer<S> for Basket<C>
where
    S: ?Sized,
    C: BasketComponent + Valuer<S>,
{
    fn value(&self, input: &S) -> Result<MeasureMap, ValuationError> {
        let values: Vec<ComponentValues> = self
            .components
            .iter()
            .map(|c| {
                let values = c.value(input).unwrap_or_else(|e| {
                    warn!(component = c.name(), error = %e, "Component valuation failed");
                    MeasureMap::new()
                });
                ComponentValues::new(c.name(), c.initial_notional(), values)
            })
            .collect();

        if values.iter().all(|c| c.values.is_empty()) {
            return Err(ValuationError::NotComputable(format!(
                "no basket component could be valued ({} components)",
                values.len()
            )));
        }

        Ok(rollup_values(&values, |measure| self.policies.policy_for(measure)))
    }
}
