use argmin::{argmin_error_closure, core::*};

/// Newton's method on the stationary condition of the squared distance to a curve,
/// with the parameter constrained to a closed domain.
/// A step is skipped when the Hessian is exactly zero or the step is not finite,
/// leaving the current estimate untouched.
/// Original source: https://argmin-rs.github.io/argmin/argmin/solver/newton/struct.Newton.html
#[derive(Clone, Copy)]
pub struct PolynomialClosestParameterNewton<F> {
    /// domain of the parameter
    domain: (F, F),
}

impl<F: ArgminFloat> PolynomialClosestParameterNewton<F> {
    pub fn new(domain: (F, F)) -> Self {
        Self { domain }
    }
}

impl<O, F> Solver<O, IterState<F, F, (), F, (), F>> for PolynomialClosestParameterNewton<F>
where
    O: Gradient<Param = F, Gradient = F> + Hessian<Param = F, Hessian = F>,
    F: ArgminFloat,
{
    const NAME: &'static str = "Polynomial closest parameter newton method";

    fn next_iter(
        &mut self,
        problem: &mut Problem<O>,
        state: IterState<F, F, (), F, (), F>,
    ) -> Result<(IterState<F, F, (), F, (), F>, Option<KV>), Error> {
        let param = *state.get_param().ok_or_else(argmin_error_closure!(
            NotInitialized,
            concat!(
                "`PolynomialClosestParameterNewton` requires an initial parameter. ",
                "Please provide an initial guess via `Executor`s `configure` method."
            )
        ))?;

        let grad = problem.gradient(&param)?;
        let hessian = problem.hessian(&param)?;
        let step = grad / hessian;
        if hessian == F::zero() || !step.is_finite() {
            log::debug!("vanishing hessian at {param}, skipping newton step");
            return Ok((state.param(param), None));
        }

        let new_param = (param - step).max(self.domain.0).min(self.domain.1);

        Ok((state.param(new_param), None))
    }

    fn terminate(&mut self, state: &IterState<F, F, (), F, (), F>) -> TerminationStatus {
        if state.iter >= state.max_iters {
            return TerminationStatus::Terminated(TerminationReason::MaxItersReached);
        }

        match (state.get_param(), state.get_prev_param()) {
            (Some(current_param), Some(prev_param)) => {
                let delta = (*current_param - *prev_param).abs();
                if delta < F::epsilon() {
                    TerminationStatus::Terminated(TerminationReason::SolverConverged)
                } else {
                    TerminationStatus::NotTerminated
                }
            }
            _ => TerminationStatus::NotTerminated,
        }
    }
}
