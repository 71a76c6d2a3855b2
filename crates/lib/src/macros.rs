/// Helper macro to build an input processor.
///
/// The closure argument is parsed as the given type, and the block converts
/// it into the output type. Errors raised in the block are associated with
/// the span of input that was consumed.
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let error = $crate::input::IStrError::boxed(original.index()..p.index(), e);
                        *p = original;
                        Err(error)
                    }
                }
            }
        }
    };
}

/// Path to an input file, relative to the `inputs` directory of the crate
/// invoking the macro.
#[macro_export]
macro_rules! input_path {
    ($path:literal) => {
        concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path)
    };
}

/// Declare the `main` function of a puzzle.
///
/// ```ignore
/// lib::entry!("d01.txt", solve);
///
/// fn solve(input: IStr) -> Result<(u32, u32)> {
///     todo!()
/// }
/// ```
#[macro_export]
macro_rules! entry {
    ($path:literal, $solve:path) => {
        fn main() -> $crate::prelude::Result<()> {
            $crate::cli::run($crate::input_path!($path), $solve)
        }
    };
}
