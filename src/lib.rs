pub mod configuration;

pub mod io {
    pub mod parser;
    pub mod reader;
    pub mod writer;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod piecewisepolynomial;
        }
    }
    pub mod round;
}

pub mod xy {
    pub mod xy;
    pub mod xyerror;
    pub mod borders;
    pub mod overlap;
    pub mod arithmetic;
    pub mod analysis;
    pub mod noisehistogram;
    pub mod operations;
}
