fn main() {
    multiversx_sc_meta_lib::cli_main::<cbd_prize::AbiProvider>();
}
