use super::Component;

/// A wrapper that observes input and output without modifying behavior.
///
/// This struct is used internally by `.inspect()`.
pub(crate) struct Inspect<C, InputHandler, OutputHandler> {
    pub(crate) component: C,
    pub(crate) input_handler: InputHandler,
    pub(crate) output_handler: OutputHandler,
}

impl<C, InputHandler, OutputHandler> Component for Inspect<C, InputHandler, OutputHandler>
where
    C: Component,
    InputHandler: Fn(&C::Input),
    OutputHandler: Fn(&C::Output),
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.input_handler)(&input);
        let output = self.component.call(input)?;
        (self.output_handler)(&output);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error, PartialEq)]
    #[error("odd input")]
    struct OddInput;

    /// Halves even numbers and rejects odd ones.
    struct Halver;

    impl Component for Halver {
        type Input = i32;
        type Output = i32;
        type Error = OddInput;

        fn call(&self, input: i32) -> Result<i32, OddInput> {
            if input % 2 == 0 { Ok(input / 2) } else { Err(OddInput) }
        }
    }

    #[test]
    fn handlers_see_input_and_output() {
        let log = RefCell::new(Vec::new());
        let halver = Halver.inspect(
            |input| log.borrow_mut().push(format!("in {input}")),
            |output| log.borrow_mut().push(format!("out {output}")),
        );

        assert_eq!(halver.call(8), Ok(4));
        assert_eq!(*log.borrow(), vec!["in 8", "out 4"]);
    }

    #[test]
    fn output_handler_skipped_on_error() {
        let outputs = RefCell::new(0);
        let halver = Halver.inspect(|_| {}, |_| *outputs.borrow_mut() += 1);

        assert_eq!(halver.call(3), Err(OddInput));
        assert_eq!(*outputs.borrow(), 0);
    }
}
