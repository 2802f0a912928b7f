/// Creates a guarded [`OrderedMap`](crate::OrderedMap) from a list of `key => value` pairs.
///
/// Pairs are set in the order they are written, so the resulting order is the order of first
/// appearance, and a repeated key takes its last value.
///
/// # Examples
///
/// This example creates a map without specifying the capacity.
///
/// > Note: The map is pre-sized for the number of pairs, so building it doesn't reallocate.
///
/// ```
/// use ordmap::ordmap;
///
/// let fellowship = ordmap! {
///     "Frodo" => "The Shire",
///     "Legolas" => "Mirkwood",
///     "Gimli" => "The Blue Mountains",
/// };
///
/// assert_eq!(fellowship.len(), 3);
/// assert_eq!(fellowship.index_of("Legolas"), Some(1));
/// assert_eq!(fellowship.get("Gimli"), Some("The Blue Mountains"));
/// ```
///
/// This example creates a map with a specified capacity, written before the pairs.
///
/// > Note: The map reserves the `max` of the given capacity and the number of pairs.
///
/// ```
/// use ordmap::ordmap;
///
/// let map = ordmap! {
///     10;
///     1 => "one",
///     2 => "two",
/// };
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&2), Some("two"));
/// ```
#[macro_export]
macro_rules! ordmap {
    // Internal rules, matched first so `@` never reaches the expression parser.
    (@unit $key:expr) => {
        ()
    };
    (@count $( $key:expr ),*) => {
        <[()]>::len(&[$( $crate::ordmap!(@unit $key) ),*])
    };
    // Pattern without explicit capacity.
    ( $( $key:expr => $value:expr ),* $(,)? ) => {
        {
            let count = $crate::ordmap!(@count $( $key ),*);
            let map = $crate::OrderedMap::with_capacity(count);
            $(
                map.set($key, $value);
            )*
            map
        }
    };
    // Pattern with explicit capacity.
    ( $capacity:expr; $( $key:expr => $value:expr ),* $(,)? ) => {
        {
            let count = $crate::ordmap!(@count $( $key ),*);
            let capacity: usize = $capacity;
            let map = $crate::OrderedMap::with_capacity(::core::cmp::max(capacity, count));
            $(
                map.set($key, $value);
            )*
            map
        }
    };
    // Catch-all pattern for invalid patterns.
    ( $( $tt:tt )* ) => {
        compile_error!(
            "Invalid syntax. Use `ordmap! { key => value, ... }` or `ordmap! { capacity; key => value, ... }`."
        );
    };
}
