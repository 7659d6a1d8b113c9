mod enrichment;
