mod inspect;

/// The core trait for defining models in pvsim.
///
/// A `Component` takes an input and produces an output. Components should be
/// deterministic, always producing the same result for a given input.
///
/// ## Implementing `Component`
///
/// To define a `Component`, implement the [`call()`] method, which takes
/// an input and returns either an output or an error.
///
/// ## Adapting Components
///
/// [`Component::inspect()`] wraps a component so that its inputs and
/// successful outputs can be observed (e.g., logged) without changing
/// behavior.
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// This is the only method required when implementing `Component`.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Inspects inputs and outputs without modifying behavior.
    ///
    /// # Parameters
    ///
    /// - `input_handler`: Called before execution to inspect the input.
    /// - `output_handler`: Called after a successful execution to inspect the output.
    ///
    /// # Returns
    ///
    /// A new component that calls the handlers but otherwise behaves the same.
    ///
    /// # Example
    ///
    /// ```
    /// use std::{cell::Cell, convert::Infallible};
    /// use pvsim_core::Component;
    ///
    /// struct Doubler;
    ///
    /// impl Component for Doubler {
    ///     type Input = i32;
    ///     type Output = i32;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
    ///         Ok(input * 2)
    ///     }
    /// }
    ///
    /// let seen = Cell::new(0);
    /// let inspected = Doubler.inspect(|_| {}, |output| seen.set(*output));
    ///
    /// assert_eq!(inspected.call(5), Ok(10));
    /// assert_eq!(seen.get(), 10);
    /// ```
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> impl Component<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        OutputHandler: Fn(&Self::Output),
    {
        inspect::Inspect {
            component: self,
            input_handler,
            output_handler,
        }
    }
}
