use ferrite_conv::{kernels, pool2d, ConvLayer, ActivationFunction, Matrix, PoolMode, TicTacToe};

fn main() -> ferrite_conv::Result<()> {
    let mut rng = rand::thread_rng();
    let mut game = TicTacToe::new(3, 3)?;
    game.fill_random(&mut rng, 3, 3)?;

    println!("Board:");
    print!("{}", game);

    for (name, kernel) in kernels::x_o_kernels() {
        // Bias of -4 leaves only full matches of the detector standing.
        let layer = ConvLayer::new(kernel, -4.0, ActivationFunction::ReLU);
        let response = layer.forward(game.grid())?;
        let pooled = pool2d(&response, 2, PoolMode::Max)?;
        println!("\n{} detector after ReLU and 2x2 max-pooling:", name);
        print!("{}", pooled);
    }

    // An untrained kernel for comparison: no mark stands out.
    let random = Matrix::random(3, 3, &mut rng);
    println!("\nrandom kernel:");
    print!("{}", random);
    let layer = ConvLayer::new(random, 0.0, ActivationFunction::Identity);
    let pooled = pool2d(&layer.forward(game.grid())?, 2, PoolMode::Max)?;
    println!("\nrandom detector after 2x2 max-pooling:");
    print!("{}", pooled);

    Ok(())
}
