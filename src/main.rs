fn main() {
    tonemill_bin::main();
}
