//! Macros for defining prime field parameter types.

/// Creates a ZST implementing [`FieldParams`][crate::FieldParams] for a given modulus.
///
/// The type and its Montgomery constants are generated by `crypto-bigint`'s
/// `impl_modulus!`, so `uint` must be a width with a double-width `ConcatMixed` impl.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field modulus
/// - big-endian hex serialization of the modulus, padded to the width of `uint`
/// - `crypto-bigint` unsigned integer type (e.g. `U256`)
/// - number of bytes in an encoded field element
/// - generator of the multiplicative group
/// - documentation string for the field modulus type
///
/// ```
/// use towerfield::{Fp, bigint::U256};
///
/// towerfield::field_params!(
///     name: FrParams,
///     modulus: "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
///     uint: U256,
///     bytes: 32,
///     multiplicative_generator: 5,
///     doc: "BN254 scalar field"
/// );
///
/// type Fr = Fp<FrParams, { U256::LIMBS }>;
/// assert_eq!(Fr::from_u64(2) + Fr::from_u64(3), Fr::from_u64(5));
/// ```
#[macro_export]
macro_rules! field_params {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        uint: $uint:ty,
        bytes: $bytes:expr,
        multiplicative_generator: $multiplicative_generator:expr,
        doc: $doc:expr
    ) => {
        $crate::bigint::impl_modulus!($name, $uint, $modulus_hex);

        #[doc = $doc]
        impl $crate::FieldParams<{ <$uint>::LIMBS }> for $name {
            const MODULUS_HEX: &'static str = $modulus_hex;
            const BYTES: usize = $bytes;
            const MULTIPLICATIVE_GENERATOR: u64 = $multiplicative_generator;
            type Repr = $crate::FieldBytes<$bytes>;
        }
    };
}
