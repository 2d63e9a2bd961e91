quantity!(Milligrams, via: f64, suffix: "mg", precision: 1);
