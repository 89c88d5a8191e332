use fdist_ctl::SimParams;

pub fn print_sim_params(params: &SimParams) {
    println!("\n📋 Simulation Parameters");
    println!("  • Populations: {} [-p, --npops]", params.npops);
    println!("  • Sampled Populations: {} [-s, --nsamples]", params.nsamples);
    println!("  • Target Fst: {} [-f, --fst]", params.fst);
    if params.clamped_fst() != params.fst {
        println!("    (clamped to {} for the simulator)", params.clamped_fst());
    }
    println!("  • Sample Size: {} [-z, --sample-size]", params.sample_size);
    println!("  • Mutation Model: {} [-m, --mutation]", params.mutation);
    println!("  • Simulations: {} [-n, --num-sims]", params.num_sims);
}

pub fn print_cplot_rows(rows: &[Vec<f64>]) {
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.6}")).collect();
        println!("{}", cells.join(" "));
    }
}
