#![warn(missing_docs)]
//! Module for uom macros that facilitate the creation of single unit values or lists of them
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {

    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        {
            use std::vec::Vec;
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($unit_type::new::<$unit>($x));
            )*
            temp_vec
        }
    };
}
///macro to create a Length in nanometer
#[macro_export]
macro_rules! nanometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::nanometer};
        $crate::uom_unit_creator![nanometer, Length, $( $x ),*]
    }};
}
///macro to create an angle in degree
#[macro_export]
macro_rules! degree {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Angle, angle::degree};
        $crate::uom_unit_creator![degree, Angle, $( $x ),*]
    }};
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use uom::si::{angle::radian, f64::Length, length::meter};
    #[test]
    fn single_values() {
        assert_abs_diff_eq!(nanometer!(532.0).get::<meter>(), 532.0e-9);
        assert_abs_diff_eq!(
            degree!(180.0).get::<radian>(),
            std::f64::consts::PI,
            epsilon = 1e-12
        );
    }
    #[test]
    fn vec_values() {
        let wvls: Vec<Length> = nanometer!(400.0, 500.0, 600.0);
        assert_eq!(wvls.len(), 3);
        assert_abs_diff_eq!(wvls[2].get::<meter>(), 600.0e-9, epsilon = 1e-15);
    }
}
