//! Report layout contract tests
//!
//! These tests pin the full rendered text of each discipline section over
//! the reference workload, plus the separators and spacing rules the layout
//! is built from.

// ===== Golden Sections (reference workload, quantum 2, alpha 0.5) =====

const FCFS_SECTION: &str = concat!(
    "Scheduling : FCFS\n",
    "====================================================\n",
    "<time 0> [new arrival] process 1\n",
    "<time 0> process 1 is running\n",
    "<time 1> [new arrival] process 2\n",
    "<time 1> process 1 is running\n",
    "<time 2> [new arrival] process 3\n",
    "<time 2> process 1 is running\n",
    "<time 3> process 1 is running\n",
    "<time 4> process 1 is finished\n",
    "------------------------------ (Context-Switch)\n",
    "<time 4> process 2 is running\n",
    "<time 5> process 2 is running\n",
    "<time 6> process 2 is running\n",
    "<time 7> process 2 is finished\n",
    "------------------------------ (Context-Switch)\n",
    "<time 7> process 3 is running\n",
    "<time 8> process 3 is running\n",
    "<time 9> process 3 is finished\n",
    "<time 9> all processes finish\n",
    "====================================================\n",
    "Average cpu usage : 100.00 %\n",
    "Average waiting time : 2.67 \n",
    "Average response time : 2.67 \n",
    "Average turnaround time : 5.67 \n",
    "*********************************************************************************\n",
);

const ROUND_ROBIN_SECTION: &str = concat!(
    "Scheduling : RR\n",
    "====================================================\n",
    "<time 0> [new arrival] process 1\n",
    "<time 0> process 1 is running\n",
    "<time 1> [new arrival] process 2\n",
    "<time 1> process 1 is running\n",
    "<time 2> [new arrival] process 3\n",
    "------------------------------ (Context-Switch)\n",
    "<time 2> process 2 is running\n",
    "<time 3> process 2 is running\n",
    "------------------------------ (Context-Switch)\n",
    "<time 4> process 3 is running\n",
    "<time 5> process 3 is running\n",
    "<time 6> process 3 is finished\n",
    "------------------------------ (Context-Switch)\n",
    "<time 6> process 1 is running\n",
    "<time 7> process 1 is running\n",
    "<time 8> process 1 is finished\n",
    "------------------------------ (Context-Switch)\n",
    "<time 8> process 2 is running\n",
    "<time 9> process 2 is finished\n",
    "<time 9> all processes finish\n",
    "====================================================\n",
    "Average cpu usage : 100.00 %\n",
    "Average waiting time : 3.67 \n",
    "Average response time : 1.00 \n",
    "Average turnaround time : 6.67 \n",
    "*********************************************************************************\n",
);

const PRIORITY_SECTION: &str = concat!(
    "Scheduling : Preemptive Priority Scheduling with Aging\n",
    "====================================================\n",
    "<time 0> [new arrival] process 1\n",
    "<time 0> process 1 is running[priority 1.00]\n",
    "<time 1> [new arrival] process 2\n",
    "<time 1> process 1 is running[priority 1.00]\n",
    "<time 2> [new arrival] process 3\n",
    "------------------------------ (Context-Switch)\n",
    "<time 2> process 2 is running[priority 1.50]\n",
    "<time 3> process 2 is running[priority 1.50]\n",
    "------------------------------ (Context-Switch)\n",
    "<time 4> process 3 is running[priority 2.00]\n",
    "------------------------------ (Context-Switch)\n",
    "<time 5> process 1 is running[priority 2.50]\n",
    "<time 6> process 1 is running[priority 2.50]\n",
    "<time 7> process 1 is finished[priority 2.50]\n",
    "------------------------------ (Context-Switch)\n",
    "<time 7> process 2 is running[priority 3.00]\n",
    "<time 8> process 2 is finished[priority 3.00]\n",
    "------------------------------ (Context-Switch)\n",
    "<time 8> process 3 is running[priority 3.50]\n",
    "<time 9> process 3 is finished\n",
    "<time 9> all processes finish\n",
    "====================================================\n",
    "Average cpu usage : 100.00 %\n",
    "Average waiting time : 4.00 \n",
    "Average response time : 1.00 \n",
    "Average turnaround time : 7.00 \n",
    "*********************************************************************************\n",
);

// ===== Contract Tests =====
