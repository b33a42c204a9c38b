/// Duplicate an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` for each type
/// `$Target`, making it available within `$imp` under the alias `$Alias`.
///
/// Useful for const-generic types where only a few instantiations are meaningful, i.e.
/// `item_with!{V: Vector<2>, Vector<3> => impl_add_sub!{...}}`.
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($Target:ty),+ => $imp:item} => {
        $(
            const _: () = { // anonymous module
                type $Alias = $Target;
                $imp
            };
        )+
    };
}
